use std::fmt;

use crate::net::Response;

/// Result of one fetch: the response as the client returned it, or the
/// message of whatever went wrong.
///
/// Both variants render through the same [`Display`](fmt::Display) impl, so a
/// caller that does not care which one it got can just print it.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Response),
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Failure message, if this is a failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(msg) => Some(msg),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(resp) => fmt::Display::fmt(resp, f),
            Outcome::Failure(msg) => f.write_str(msg),
        }
    }
}
