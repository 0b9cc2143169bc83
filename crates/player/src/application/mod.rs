//! Application layer - use cases over the outbound ports

pub mod api;
pub mod error;
pub mod services;

pub use api::Api;
pub use error::ServiceError;
