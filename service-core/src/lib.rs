//! service-core: Shared HTTP infrastructure for the prompt relay service.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;

pub use axum;
pub use tokio;
pub use tracing;
