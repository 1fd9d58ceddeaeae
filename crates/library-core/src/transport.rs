//! HTTP Transport
//!
//! `reqwest` backed transport. On wasm32 reqwest drives the browser `fetch` API.

use async_trait::async_trait;

use crate::error::{LibraryError, LibraryResult};
use crate::graphql::{GraphQlRequest, HttpResponse, Transport};

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn post(&self, endpoint: &str, bearer: Option<&str>, request: &GraphQlRequest) -> LibraryResult<HttpResponse> {
        let mut builder = self.http.post(endpoint).json(request);
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| LibraryError::NetworkFailure(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LibraryError::NetworkFailure(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
