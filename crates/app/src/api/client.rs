//! Typed HTTP client.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::{Serialize, de::DeserializeOwned};

use crate::{api::ApiError, session::Session};

/// Client for the bookstore REST API.
///
/// Attaches the session's bearer token to every request when one is
/// present; a missing token is not treated as an error here, the server
/// rejects unauthenticated calls itself. Requests are never retried.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: Client,
    session: Arc<Session>,
}

impl ApiClient {
    /// Create a new client for the given base URL and session.
    #[must_use]
    pub fn new(base_url: Url, session: Arc<Session>) -> Self {
        Self {
            base_url,
            http: Client::new(),
            session,
        }
    }

    /// The session this client authenticates with.
    #[must_use]
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or
    /// an unexpected response body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.url(path))).await?;

        Ok(response.json().await?)
    }

    /// `POST` a JSON body, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn post_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(self.http.post(self.url(path)).json(body)).await?;

        Ok(())
    }

    /// `POST` a JSON body and deserialize the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or
    /// an unexpected response body.
    pub async fn post_json_response<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;

        Ok(response.json().await?)
    }

    /// `POST` with an empty body, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.post(self.url(path))).await?;

        Ok(())
    }

    /// `PUT` a JSON body, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn put_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(self.http.put(self.url(path)).json(body)).await?;

        Ok(())
    }

    /// `DELETE` a resource, ignoring any response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(path))).await?;

        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = match self.session.bearer() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        Err(ApiError::Server {
            status,
            detail: parse_detail(&text),
        })
    }
}

/// Extract the `detail` field from an error body shaped like
/// `{"detail": "..."}`. Anything else yields `None`.
fn parse_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    value.get("detail")?.as_str().map(str::to_owned)
}
