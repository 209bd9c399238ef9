//! Test utilities for code that talks to the design service.
//!
//! This module is only available with the `testing` feature or in tests.

use parking_lot::Mutex;
use reqwest::Url;

use crate::{ClientError, HttpResponse, Transport};

/// A request observed by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub url: String,
    pub token: String,
}

type Handler = Box<dyn Fn(&str) -> HttpResponse + Send + Sync>;

/// Scripted transport that records every request.
///
/// Share it with the client through an `Arc` to inspect calls afterwards.
pub struct MockTransport {
    handler: Handler,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    /// Answer each request with `handler(url)`.
    pub fn new(handler: impl Fn(&str) -> HttpResponse + Send + Sync + 'static) -> Self {
        Self {
            handler: Box::new(handler),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answer every request with the same status and body.
    pub fn constant(status: u16, body: impl Into<String>) -> Self {
        let response = HttpResponse::new(status, body);
        Self::new(move |_| response.clone())
    }

    /// Route by path: subtree requests get `nodes`, asset exports get `images`.
    pub fn design(nodes: impl Into<String>, images: impl Into<String>) -> Self {
        let nodes = HttpResponse::new(200, nodes);
        let images = HttpResponse::new(200, images);
        Self::new(move |url| {
            if url.contains("/images/") {
                images.clone()
            } else {
                nodes.clone()
            }
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str, token: &str) -> Result<HttpResponse, ClientError> {
        self.calls.lock().push(RecordedCall {
            url: url.to_string(),
            token: token.to_string(),
        });
        Ok((self.handler)(url))
    }
}

/// Decoded values of the `ids` query parameter of a request URL.
pub fn query_ids(url: &str) -> Vec<String> {
    let Ok(url) = Url::parse(url) else {
        return Vec::new();
    };
    url.query_pairs()
        .filter(|(key, _)| key == "ids")
        .flat_map(|(_, value)| {
            value
                .split(',')
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}
