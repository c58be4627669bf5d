//! Greets someone, then loads a URL and prints whatever came back.
//!
//! The interesting part is [`net::load_url`]: it performs one GET through an
//! injected [`net::HttpClient`] and never fails. Transport errors are turned
//! into the failure message of an [`outcome::Outcome`], which the
//! [`composer::Composer`] prints the same way as a successful response.

pub mod composer;
pub mod config;
pub mod errors;
pub mod greeting;
pub mod net;
pub mod outcome;
