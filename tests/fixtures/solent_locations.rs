//! Harbour positions and known polylines for realistic fixtures.

use sail_route::Coordinate;

/// A named harbour with coordinates.
#[derive(Debug, Clone)]
pub struct Harbour {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Harbour {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coord(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

pub const HARBOURS: &[Harbour] = &[
    Harbour::new("Portsmouth", 50.79890, -1.10770),
    Harbour::new("Cowes", 50.76270, -1.29680),
    Harbour::new("Lymington", 50.75780, -1.53790),
    Harbour::new("Yarmouth", 50.70690, -1.50070),
    Harbour::new("Hamble", 50.85880, -1.31340),
    Harbour::new("Cherbourg", 49.64500, -1.62000),
];

pub fn harbour(name: &str) -> Coordinate {
    HARBOURS
        .iter()
        .find(|h| h.name == name)
        .map(Harbour::coord)
        .unwrap_or_else(|| panic!("unknown harbour {}", name))
}

/// An encoded polyline with the points it must decode to.
pub struct KnownPolyline {
    pub encoded: &'static str,
    pub points: &'static [(f64, f64)],
}

pub const KNOWN_POLYLINES: &[KnownPolyline] = &[
    KnownPolyline {
        encoded: "_p~iF~ps|U_ulLnnqC_mqNvxq`@",
        points: &[(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)],
    },
    KnownPolyline {
        encoded: "??",
        points: &[(0.0, 0.0)],
    },
    KnownPolyline {
        encoded: "_ibE_ibE_ibE_ibE",
        points: &[(1.0, 1.0), (2.0, 2.0)],
    },
    KnownPolyline {
        encoded: "~hbE~hbE",
        points: &[(-1.0, -1.0)],
    },
];

pub fn assert_points_close(actual: &[Coordinate], expected: &[(f64, f64)]) {
    assert_eq!(actual.len(), expected.len(), "point count differs");
    for (i, (point, (lat, lng))) in actual.iter().zip(expected).enumerate() {
        assert!(
            (point.lat - lat).abs() < 1e-5 && (point.lng - lng).abs() < 1e-5,
            "point {} was {:?}, expected ({}, {})",
            i,
            point,
            lat,
            lng
        );
    }
}
