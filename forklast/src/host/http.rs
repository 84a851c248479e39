//! HTTP client for the opencode server API.

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

use super::{HostClient, HostError, LogEntry, PromptBody, Toast};
use crate::models::{MessageWithParts, Session};

/// Talks to a running opencode server.
#[derive(Debug, Clone)]
pub struct OpencodeClient {
    http: reqwest::Client,
    base_url: String,
    directory: Option<String>,
}

impl OpencodeClient {
    pub fn new(base_url: &str, directory: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            directory,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach the project directory every host route accepts.
    fn scoped(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.directory {
            Some(dir) => request.query(&[("directory", dir)]),
            None => request,
        }
    }

    async fn send(&self, endpoint: &str, request: RequestBuilder) -> Result<Response, HostError> {
        self.scoped(request)
            .send()
            .await
            .map_err(|e| HostError::transport(endpoint, e))
    }

    async fn expect_success(endpoint: &str, resp: Response) -> Result<Response, HostError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(HostError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(endpoint: &str, resp: Response) -> Result<T, HostError> {
        resp.json().await.map_err(|e| HostError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}

fn session_path(session_id: &str, suffix: &str) -> String {
    format!("/session/{}{suffix}", urlencoding::encode(session_id))
}

#[async_trait]
impl HostClient for OpencodeClient {
    async fn messages(&self, session_id: &str) -> Result<Vec<MessageWithParts>, HostError> {
        let endpoint = session_path(session_id, "/message");
        let resp = self.send(&endpoint, self.http.get(self.url(&endpoint))).await?;
        let resp = Self::expect_success(&endpoint, resp).await?;
        Self::decode(&endpoint, resp).await
    }

    async fn create_session(&self, title: &str) -> Result<Option<Session>, HostError> {
        let endpoint = "/session";
        let request = self.http.post(self.url(endpoint)).json(&json!({ "title": title }));
        let resp = self.send(endpoint, request).await?;

        if !resp.status().is_success() {
            tracing::debug!(status = %resp.status(), "session creation rejected by host");
            return Ok(None);
        }

        let session: Option<Session> = Self::decode(endpoint, resp).await?;
        Ok(session.filter(|s| !s.id.is_empty()))
    }

    async fn prompt(&self, session_id: &str, body: &PromptBody) -> Result<(), HostError> {
        let endpoint = session_path(session_id, "/message");
        let request = self.http.post(self.url(&endpoint)).json(body);
        let resp = self.send(&endpoint, request).await?;
        Self::expect_success(&endpoint, resp).await?;
        Ok(())
    }

    async fn log(&self, entry: &LogEntry) -> Result<(), HostError> {
        let endpoint = "/log";
        let resp = self.send(endpoint, self.http.post(self.url(endpoint)).json(entry)).await?;
        Self::expect_success(endpoint, resp).await?;
        Ok(())
    }

    async fn open_sessions(&self) -> Result<(), HostError> {
        let endpoint = "/tui/open-sessions";
        let resp = self.send(endpoint, self.http.post(self.url(endpoint))).await?;
        Self::expect_success(endpoint, resp).await?;
        Ok(())
    }

    async fn show_toast(&self, toast: &Toast) -> Result<(), HostError> {
        let endpoint = "/tui/show-toast";
        let resp = self.send(endpoint, self.http.post(self.url(endpoint)).json(toast)).await?;
        Self::expect_success(endpoint, resp).await?;
        Ok(())
    }
}
