//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with the game server and the
//! dice without depending on concrete implementations.

pub mod api_port;
pub mod random_port;
pub mod raw_api_port;

pub use api_port::ApiError;
pub use random_port::RandomPort;
pub use raw_api_port::RawApiPort;

#[cfg(test)]
pub use random_port::MockRandomPort;
#[cfg(test)]
pub use raw_api_port::MockRawApiPort;
