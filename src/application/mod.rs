//! Application layer orchestrating validated requests toward providers.

pub mod services;
