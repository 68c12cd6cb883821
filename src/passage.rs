//! Speed / time / distance passage calculator.
//!
//! Speed in knots, time in hours, distance in nautical miles: any two fix
//! the third.

use crate::error::PassageError;
use crate::haversine::route_length_nm;
use crate::polyline::Polyline;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Passage {
    pub speed_knots: f64,
    pub time_hours: f64,
    pub distance_nm: f64,
}

impl Passage {
    /// Fills in whichever value is missing.
    ///
    /// When all three are given, speed and time win and distance is
    /// recomputed.
    pub fn solve(
        speed_knots: Option<f64>,
        time_hours: Option<f64>,
        distance_nm: Option<f64>,
    ) -> Result<Self, PassageError> {
        let speed = speed_knots.map(|v| validate("speed", v)).transpose()?;
        let time = time_hours.map(|v| validate("time", v)).transpose()?;
        let distance = distance_nm.map(|v| validate("distance", v)).transpose()?;

        match (speed, time, distance) {
            (Some(speed), Some(time), _) => Ok(Self {
                speed_knots: speed,
                time_hours: time,
                distance_nm: speed * time,
            }),
            (Some(speed), None, Some(distance)) => Ok(Self {
                speed_knots: speed,
                time_hours: divide(distance, speed, "speed")?,
                distance_nm: distance,
            }),
            (None, Some(time), Some(distance)) => Ok(Self {
                speed_knots: divide(distance, time, "time")?,
                time_hours: time,
                distance_nm: distance,
            }),
            _ => Err(PassageError::Underdetermined),
        }
    }

    /// Passage along a route at a steady speed.
    pub fn for_route(route: &Polyline, speed_knots: f64) -> Result<Self, PassageError> {
        Self::solve(Some(speed_knots), None, Some(route_length_nm(route)))
    }
}

fn validate(field: &'static str, value: f64) -> Result<f64, PassageError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PassageError::InvalidInput { field, value })
    }
}

fn divide(numerator: f64, divisor: f64, field: &'static str) -> Result<f64, PassageError> {
    if divisor == 0.0 {
        return Err(PassageError::ZeroDivisor { field });
    }
    Ok(numerator / divisor)
}
