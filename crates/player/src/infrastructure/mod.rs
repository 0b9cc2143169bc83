pub mod http_client;
pub mod random;

pub use http_client::ApiAdapter;
pub use random::SystemRandom;
