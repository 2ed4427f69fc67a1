pub mod key_source;
pub mod metrics;
pub mod providers;

pub use key_source::{ApiKeySource, EnvKeySource, StaticKeySource};
