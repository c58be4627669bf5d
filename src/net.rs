mod client;
mod fetch;
mod response;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{HttpClient, ReqwestClient};
pub use fetch::load_url;
pub use response::Response;
