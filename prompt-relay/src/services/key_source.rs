//! Where the relay gets its upstream API key.

use secrecy::Secret;

/// Supplies the upstream API key for one invocation.
///
/// Called once per request; implementations must not assume the value is
/// stable between calls.
pub trait ApiKeySource: Send + Sync {
    /// The current key, or `None` when absent or empty.
    fn api_key(&self) -> Option<Secret<String>>;
}

/// Reads the key from a process environment variable on every call, so a
/// rotated key takes effect without a restart.
#[derive(Debug, Clone)]
pub struct EnvKeySource {
    var: String,
}

impl EnvKeySource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl ApiKeySource for EnvKeySource {
    fn api_key(&self) -> Option<Secret<String>> {
        std::env::var(&self.var)
            .ok()
            .filter(|key| !key.is_empty())
            .map(Secret::new)
    }
}

/// A key fixed at construction.
#[derive(Clone)]
pub struct StaticKeySource {
    key: Option<Secret<String>>,
}

impl StaticKeySource {
    pub fn new(key: impl Into<String>) -> Self {
        let key: String = key.into();
        Self {
            key: (!key.is_empty()).then(|| Secret::new(key)),
        }
    }

    pub fn missing() -> Self {
        Self { key: None }
    }
}

impl ApiKeySource for StaticKeySource {
    fn api_key(&self) -> Option<Secret<String>> {
        self.key.clone()
    }
}
