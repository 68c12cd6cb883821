//! Test fixtures for sail-route.
//!
//! Provides:
//! - Known encoded polylines with their decoded points
//! - Real Solent / Channel harbour positions
//! - A one-shot HTTP stub standing in for the directions service

#![allow(unused)]

pub mod directions_stub;
pub mod solent_locations;

pub use directions_stub::*;
pub use solent_locations::*;
