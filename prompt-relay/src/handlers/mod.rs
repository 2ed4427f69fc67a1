//! HTTP adapters over the relay core.

pub mod health;
pub mod metrics;
pub mod relay;
