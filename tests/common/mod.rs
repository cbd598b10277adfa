#![allow(dead_code)]

use std::sync::Arc;

use travel_search::application::services::LogDispatch;
use travel_search::state::AppState;

/// Builds an [`AppState`] backed by the logging dispatcher, which accepts
/// every normalized request. Tests here exercise the validation surface only.
pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(LogDispatch::new()))
}
