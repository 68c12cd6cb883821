//! sail-route core
//!
//! Route geometry for a sailing companion: encoded polyline codec, a
//! directions adapter, and the navigation arithmetic around them.

pub mod coordinate;
pub mod error;
pub mod traits;
pub mod polyline;
pub mod directions;
pub mod haversine;
pub mod passage;
pub mod logging;

pub use coordinate::Coordinate;
pub use error::{ConfigError, DecodeError, PassageError, RouteError};
pub use polyline::Polyline;
