//! # Travel Search
//!
//! A unified travel search validation and dispatch service built with Axum.
//!
//! ## Architecture
//!
//! Heterogeneous, user-entered search criteria for flights, hotels, and cars
//! arrive as JSON and leave as well-formed, provider-ready queries — or as an
//! ordered list of field errors. The layers:
//!
//! - **Domain Layer** ([`domain`]) - Normalized search entities
//! - **Validation Layer** ([`validation`]) - Structural schemas, timezone
//!   resolution, and cross-field invariants
//! - **Application Layer** ([`application`]) - Provider dispatch seam
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Request Flow
//!
//! ```text
//! raw JSON -> structural checks -> timezone -> defaults -> invariants
//!          -> normalized request -> provider dispatch
//! ```
//!
//! Every violated field is reported in one pass; a request is either fully
//! normalized or rejected, never partially applied.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional configuration
//! export LISTEN="0.0.0.0:3000"
//! export LOG_FORMAT="text"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod validation;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LogDispatch, ProviderDispatch};
    pub use crate::domain::{CarSearch, FlightSearch, HotelSearch, TravelerComposition};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::validation::{ErrorKind, FieldError, ValidationFailure};
}
