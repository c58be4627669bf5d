//! Scripted [`HttpClient`] for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use http::HeaderMap;

use crate::errors::FetchError;
use crate::net::{HttpClient, Response};

/// Plays back queued results in order and records every URL it was asked for.
#[derive(Debug, Default)]
pub struct MockClient {
    script: Mutex<VecDeque<Result<Response, FetchError>>>,
    requested: Mutex<Vec<String>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, result: Result<Response, FetchError>) -> Self {
        self.script.lock().unwrap().push_back(result);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Network("mock script exhausted".into())))
    }
}

pub fn ok_response(url: &str, body: &str) -> Response {
    Response {
        url: url::Url::parse(url).unwrap(),
        status: 200,
        status_text: "OK".into(),
        headers: HeaderMap::new(),
        body: body.as_bytes().to_vec(),
    }
}
