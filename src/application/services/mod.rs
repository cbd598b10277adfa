//! Application services.

pub mod dispatch;

pub use dispatch::{DispatchError, DispatchResult, LogDispatch, ProviderDispatch};
