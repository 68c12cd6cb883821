//! Great-circle navigation helpers.
//!
//! Distances are in nautical miles and angles in degrees true. These are
//! the units a chart plotter or hand-bearing compass works in.

use std::future::Future;

use crate::coordinate::Coordinate;
use crate::error::DecodeError;
use crate::polyline::Polyline;
use crate::traits::RouteProvider;

/// Mean Earth radius in nautical miles.
const EARTH_RADIUS_NM: f64 = 3440.065;

/// Great-circle distance between two points in nautical miles.
pub fn distance_nm(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_NM * c
}

/// Sum of leg distances along a route, in nautical miles.
pub fn route_length_nm(route: &Polyline) -> f64 {
    route
        .points()
        .windows(2)
        .map(|leg| distance_nm(leg[0], leg[1]))
        .sum()
}

/// Initial great-circle bearing from `from` towards `to`, in `[0, 360)`.
pub fn initial_bearing(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let y = delta_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lng.cos();

    normalize_heading(y.atan2(x).to_degrees())
}

/// Wraps any angle into a compass heading in `[0, 360)`.
pub fn normalize_heading(degrees: f64) -> f64 {
    let heading = degrees.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360.0
    if heading >= 360.0 { 0.0 } else { heading }
}

/// Direct-course route provider for when no directions service is available.
///
/// Over open water the straight line is usually the route anyway.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightLine;

impl StraightLine {
    pub fn route(&self, origin: Coordinate, destination: Coordinate) -> Polyline {
        if origin == destination {
            Polyline::new(vec![origin])
        } else {
            Polyline::new(vec![origin, destination])
        }
    }
}

impl RouteProvider for StraightLine {
    fn route_between(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> impl Future<Output = Result<Polyline, DecodeError>> + Send {
        let route = self.route(origin, destination);
        async move { Ok(route) }
    }
}
