//! Encoded polyline codec for route geometries.
//!
//! Directions services ship route shapes in Google's encoded polyline format:
//! each latitude/longitude is stored as a delta from the previous point in
//! units of 1e-5 degrees, zig-zag encoded, and split into 5-bit chunks written
//! least significant first. Every chunk is offset by 63 into printable ASCII
//! and carries a continuation flag (0x20) when more chunks follow.
//!
//! Decoding happens once at the boundary; the rest of the crate works with
//! [`Polyline`] as a plain coordinate sequence.

use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::DecodeError;

/// Fixed-point scale: five decimal places of a degree.
const PRECISION: f64 = 1e5;

const CHAR_OFFSET: u8 = 63;
const CONTINUATION: u8 = 0x20;
const CHUNK_MASK: u8 = 0x1f;

/// Highest chunk offset whose five bits still fit inside the 64-bit accumulator.
const MAX_SHIFT: u32 = 55;

/// A polyline representing a route geometry as decoded coordinates.
///
/// Points are kept in travel order, origin first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true for an empty route, e.g. when no route was found.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the origin point, if any.
    pub fn first(&self) -> Option<Coordinate> {
        self.points.first().copied()
    }

    /// Returns the destination point, if any.
    pub fn last(&self) -> Option<Coordinate> {
        self.points.last().copied()
    }

    /// Encodes the points back into the compact polyline format.
    pub fn encode(&self) -> String {
        encode(&self.points)
    }
}

impl From<Vec<Coordinate>> for Polyline {
    fn from(points: Vec<Coordinate>) -> Self {
        Self::new(points)
    }
}

impl FromStr for Polyline {
    type Err = DecodeError;

    fn from_str(encoded: &str) -> Result<Self, Self::Err> {
        decode(encoded)
    }
}

/// Decodes one zig-zag delta starting at byte `index`.
///
/// Returns the signed delta and the index one past the last byte consumed.
/// Running off the end of the input while the continuation flag is still set
/// yields [`DecodeError::Truncated`] instead of reading out of bounds.
pub fn decode_delta(encoded: &str, index: usize) -> Result<(i64, usize), DecodeError> {
    let bytes = encoded.as_bytes();
    let mut cursor = index;
    let mut accumulated: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let byte = *bytes
            .get(cursor)
            .ok_or(DecodeError::Truncated { index })?;
        if !(CHAR_OFFSET..=b'~').contains(&byte) {
            return Err(DecodeError::InvalidCharacter {
                index: cursor,
                byte,
            });
        }
        if shift > MAX_SHIFT {
            return Err(DecodeError::Overflow { index });
        }

        let chunk = byte - CHAR_OFFSET;
        accumulated |= u64::from(chunk & CHUNK_MASK) << shift;
        cursor += 1;

        if chunk & CONTINUATION == 0 {
            break;
        }
        shift += 5;
    }

    let magnitude = (accumulated >> 1) as i64;
    let delta = if accumulated & 1 == 1 {
        !magnitude
    } else {
        magnitude
    };

    Ok((delta, cursor))
}

/// Decodes a complete encoded polyline. The empty string decodes to an empty
/// polyline.
pub fn decode(encoded: &str) -> Result<Polyline, DecodeError> {
    let mut points = Vec::new();
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;
    let mut index = 0;

    while index < encoded.len() {
        let (delta_lat, next) = decode_delta(encoded, index)?;
        let (delta_lng, next) = decode_delta(encoded, next)?;

        lat = lat
            .checked_add(delta_lat)
            .ok_or(DecodeError::Overflow { index })?;
        lng = lng
            .checked_add(delta_lng)
            .ok_or(DecodeError::Overflow { index })?;

        points.push(Coordinate::new(lat as f64 / PRECISION, lng as f64 / PRECISION));
        index = next;
    }

    Ok(Polyline::new(points))
}

/// Encodes coordinates into the polyline format.
///
/// Each point is rounded to 1e-5 degrees before differencing, so rounding
/// error does not accumulate along the line.
pub fn encode(points: &[Coordinate]) -> String {
    let mut out = String::with_capacity(points.len() * 8);
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for point in points {
        let lat = quantize(point.lat);
        let lng = quantize(point.lng);
        encode_delta(lat.wrapping_sub(prev_lat), &mut out);
        encode_delta(lng.wrapping_sub(prev_lng), &mut out);
        prev_lat = lat;
        prev_lng = lng;
    }

    out
}

/// Decodes many polylines in parallel, preserving input order.
pub fn decode_all<S>(inputs: &[S]) -> Vec<Result<Polyline, DecodeError>>
where
    S: AsRef<str> + Sync,
{
    inputs.par_iter().map(|s| decode(s.as_ref())).collect()
}

fn quantize(degrees: f64) -> i64 {
    (degrees * PRECISION).round() as i64
}

fn encode_delta(delta: i64, out: &mut String) {
    let mut value = ((delta << 1) ^ (delta >> 63)) as u64;
    while value >= u64::from(CONTINUATION) {
        let chunk = (value as u8 & CHUNK_MASK) | CONTINUATION;
        out.push(char::from(chunk + CHAR_OFFSET));
        value >>= 5;
    }
    out.push(char::from(value as u8 + CHAR_OFFSET));
}
