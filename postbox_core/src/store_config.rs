use crate::{PostboxError, Result};

pub const URL_ENV_VAR: &str = "UPSTASH_REDIS_REST_URL";
pub const TOKEN_ENV_VAR: &str = "UPSTASH_REDIS_REST_TOKEN";

/// Stand-in values used when the environment is not set; the startup check refuses them
pub const PLACEHOLDER_URL: &str = "YOUR_UPSTASH_REDIS_REST_URL_HERE";
pub const PLACEHOLDER_TOKEN: &str = "YOUR_UPSTASH_REDIS_REST_TOKEN_HERE";

const TLS_ENABLED: bool = cfg!(any(
    feature = "tls-native",
    feature = "tls-rustls",
    feature = "tls-rustls-insecure",
    feature = "tls-rustls-webpki"
));

/// Which wire protocol a store URL speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Upstash REST over `http://` or `https://`
    Rest,
    /// Native Redis protocol over `redis://` or `rediss://`
    Redis,
}

/// Where the store lives and how to authenticate against it
#[derive(Clone)]
pub struct StoreConfig {
    url: String,
    token: String,
}

impl StoreConfig {
    pub fn new(url: impl ToString, token: impl ToString) -> Self {
        Self {
            url: url.to_string(),
            token: token.to_string(),
        }
    }

    /// Read the URL and token from the environment, falling back to the placeholders
    pub fn from_env() -> Self {
        Self::new(
            read_env_var(URL_ENV_VAR, PLACEHOLDER_URL),
            read_env_var(TOKEN_ENV_VAR, PLACEHOLDER_TOKEN),
        )
    }

    /// Check that both values are present, not placeholders, and the URL has a known scheme
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(PostboxError::MissingEnvVar(URL_ENV_VAR));
        }
        if self.token.trim().is_empty() {
            return Err(PostboxError::MissingEnvVar(TOKEN_ENV_VAR));
        }
        if self.url == PLACEHOLDER_URL {
            return Err(PostboxError::PlaceholderEnvVar(URL_ENV_VAR));
        }
        if self.token == PLACEHOLDER_TOKEN {
            return Err(PostboxError::PlaceholderEnvVar(TOKEN_ENV_VAR));
        }
        if self.transport()? == Transport::Redis && self.is_tls() && !TLS_ENABLED {
            return Err(PostboxError::InvalidConfig(
                "rediss:// needs one of the tls-* features enabled".to_string(),
            ));
        }
        Ok(())
    }

    fn is_tls(&self) -> bool {
        self.url.to_ascii_lowercase().starts_with("rediss://")
    }

    pub fn transport(&self) -> Result<Transport> {
        let scheme = self
            .url
            .split_once("://")
            .map(|(scheme, _)| scheme.to_ascii_lowercase())
            .ok_or_else(|| PostboxError::InvalidConfig(format!("{} has no scheme", URL_ENV_VAR)))?;
        match scheme.as_str() {
            "http" | "https" => Ok(Transport::Rest),
            "redis" | "rediss" => Ok(Transport::Redis),
            other => Err(PostboxError::InvalidConfig(format!(
                "unsupported store URL scheme: {}",
                other
            ))),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// The URL cut after its last slash so database paths and inline secrets stay out of logs
    pub fn redacted_url(&self) -> String {
        match self.url.rfind('/') {
            Some(idx) => format!("{}...", &self.url[..=idx]),
            None => "...".to_string(),
        }
    }
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.redacted_url())
            .field("token", &"<hidden>")
            .finish()
    }
}

fn read_env_var(name: &str, fallback: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| fallback.to_string())
}
