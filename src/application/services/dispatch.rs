//! Provider dispatch seam.
//!
//! Handlers forward only fully-normalized requests through this trait; the
//! real upstream flight/hotel/car integrations live behind it and are not
//! part of this service.

use async_trait::async_trait;

use crate::domain::{CarSearch, FlightSearch, HotelSearch};

/// Errors that can occur while handing a search to upstream providers.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Upstream provider error: {0}")]
    Upstream(String),

    #[error("Provider dispatch unavailable")]
    Unavailable,
}

/// Result type for dispatch operations.
pub type DispatchResult = Result<(), DispatchError>;

/// Trait for forwarding normalized search requests to upstream providers.
///
/// Implementations must be thread-safe. Every argument is already validated;
/// implementations never see a request that failed the pipeline.
///
/// # Implementations
///
/// - [`LogDispatch`] - logs and accepts, for local runs and tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProviderDispatch: Send + Sync {
    /// Forwards a normalized flight search.
    async fn dispatch_flight(&self, search: &FlightSearch) -> DispatchResult;

    /// Forwards a normalized hotel search.
    async fn dispatch_hotel(&self, search: &HotelSearch) -> DispatchResult;

    /// Forwards a normalized car search.
    async fn dispatch_car(&self, search: &CarSearch) -> DispatchResult;

    /// Reports whether the dispatch path is usable, for health checks.
    async fn health_check(&self) -> bool;
}

/// A dispatch implementation that logs the normalized request and accepts it.
///
/// Used when no provider integration is configured, and by tests that only
/// exercise the validation surface.
pub struct LogDispatch;

impl LogDispatch {
    pub fn new() -> Self {
        tracing::debug!("Using LogDispatch (no provider integration configured)");
        Self
    }
}

impl Default for LogDispatch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderDispatch for LogDispatch {
    async fn dispatch_flight(&self, search: &FlightSearch) -> DispatchResult {
        tracing::info!(
            from = %search.from,
            to = %search.to,
            departure = %search.departure_date,
            travelers = search.traveler_details.total(),
            "dispatching flight search"
        );
        Ok(())
    }

    async fn dispatch_hotel(&self, search: &HotelSearch) -> DispatchResult {
        tracing::info!(
            destination = %search.destination,
            check_in = %search.check_in,
            rooms = search.guest_details.rooms,
            "dispatching hotel search"
        );
        Ok(())
    }

    async fn dispatch_car(&self, search: &CarSearch) -> DispatchResult {
        tracing::info!(
            pick_up = %search.pick_up_location,
            drop_off = %search.drop_off_location,
            "dispatching car search"
        );
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
