//! In-crate test doubles.

use std::sync::{Arc, Mutex};

use futures_util::future::BoxFuture;
use reqwest::StatusCode;

use crate::error::CoinMarketCapError;
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// Transport that records every request and answers with a canned response.
#[derive(Clone)]
pub(crate) struct RecordingTransport {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    response: Option<HttpResponse>,
}

impl RecordingTransport {
    pub(crate) fn responding(status: StatusCode, body: &str) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response: Some(HttpResponse::new(status, body)),
        }
    }

    /// Answers every request with a minimal success envelope.
    pub(crate) fn ok() -> Self {
        Self::responding(
            StatusCode::OK,
            r#"{"data":{},"status":{"error_code":0,"credit_count":1}}"#,
        )
    }

    /// Fails every request as a network error would.
    pub(crate) fn failing() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response: None,
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was recorded")
    }
}

impl Transport for RecordingTransport {
    fn fetch(
        &self,
        request: HttpRequest,
    ) -> BoxFuture<'_, Result<HttpResponse, CoinMarketCapError>> {
        self.requests.lock().unwrap().push(request);
        let response = self
            .response
            .clone()
            .ok_or_else(|| CoinMarketCapError::Transport("connection refused".to_string()));
        Box::pin(async move { response })
    }
}
