//! Application configuration.
//!
//! `AppConfig` holds the few knobs the demo has: who to greet, which URL to
//! load, and the user agent sent with the request. Defaults come from
//! [`Default`]; [`AppConfig::builder()`] customizes them with validation.
//!
//! ```rust
//! use hello_fetch::config::AppConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = AppConfig::builder()
//!     .url("http://example.com")
//!     .name("alice")
//!     .build()?;
//! assert_eq!(cfg.name, "alice");
//! # Ok(()) }
//! ```
//!
//! The URL is only checked for being non-blank. Whether it is well-formed is
//! left to the HTTP client, which reports a malformed URL as a failed fetch.

use crate::errors::ConfigError;

pub const DEFAULT_URL: &str = "http://goole.com";
pub const DEFAULT_NAME: &str = "bob";
const DEFAULT_USER_AGENT: &str = concat!("hello-fetch/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// URL fetched by the composer
    pub url: String,
    /// Name passed to the greeting
    pub name: String,
    /// User agent string for HTTP requests
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            name: DEFAULT_NAME.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl AppConfig {
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfigBuilder {
    inner: AppConfig,
}

impl AppConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut AppConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn url<S: Into<String>>(self, url: S) -> Self { self.map(|c| c.url = url.into()) }
    pub fn name<S: Into<String>>(self, name: S) -> Self { self.map(|c| c.name = name.into()) }
    pub fn user_agent<S: Into<String>>(self, ua: S) -> Self { self.map(|c| c.user_agent = ua.into()) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

fn validate(c: &AppConfig) -> Result<(), ConfigError> {
    if c.url.trim().is_empty() {
        return Err(ConfigError::EmptyUrl);
    }
    if c.user_agent.trim().is_empty() {
        return Err(ConfigError::EmptyUserAgent);
    }
    Ok(())
}
