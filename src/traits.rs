//! Seams between the route core and its collaborators.
//!
//! Route sources and error sinks are injected, never reached through globals.
//! Apps plug in their own crash reporter or a different directions backend.

use std::future::Future;
use std::sync::Arc;

use crate::coordinate::Coordinate;
use crate::error::{DecodeError, RouteError};
use crate::polyline::Polyline;

/// Produces a route between two coordinates.
///
/// Failures the caller cannot act on are absorbed into an empty polyline;
/// only a corrupt geometry from upstream surfaces as an error.
pub trait RouteProvider {
    fn route_between(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> impl Future<Output = Result<Polyline, DecodeError>> + Send;
}

/// Receives failures that were absorbed instead of returned.
pub trait ErrorReporter {
    fn report(&self, error: &RouteError);
}

impl<T: ErrorReporter + ?Sized> ErrorReporter for Arc<T> {
    fn report(&self, error: &RouteError) {
        (**self).report(error)
    }
}

impl<T: ErrorReporter + ?Sized> ErrorReporter for &T {
    fn report(&self, error: &RouteError) {
        (**self).report(error)
    }
}

/// Reports failures as `tracing` error events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &RouteError) {
        tracing::error!(error = %error, "route fetch failed");
    }
}
