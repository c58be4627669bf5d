/// Failure of a single remote fetch.
///
/// Every cause (DNS, refused connection, TLS, timeout, malformed URL) ends up
/// here. The fetch unit never hands this to its caller; it is flattened into
/// the failure message of an [`Outcome`](crate::outcome::Outcome).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Network(String),

    // Raised by clients that have nothing better to say
    #[error("")]
    Unknown,
}

impl FetchError {
    /// Human-readable message, with a fallback when the error carries none.
    ///
    /// Causes are appended (`outer: inner: ...`) since reqwest keeps the
    /// interesting part, like the DNS failure, in its source chain.
    pub fn message(&self) -> String {
        let mut parts = vec![self.to_string()];
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            parts.push(cause.to_string());
            source = cause.source();
        }
        parts.retain(|p| !p.trim().is_empty());

        if parts.is_empty() {
            return "unknown error".to_string();
        }
        parts.join(": ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("url must not be empty")]
    EmptyUrl,

    #[error("user_agent must not be empty")]
    EmptyUserAgent,
}
