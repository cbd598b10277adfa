use std::sync::Arc;

use crate::application::services::ProviderDispatch;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatch: Arc<dyn ProviderDispatch>,
}

impl AppState {
    pub fn new(dispatch: Arc<dyn ProviderDispatch>) -> Self {
        Self { dispatch }
    }
}
