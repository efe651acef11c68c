//! REST client for the companion backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! the endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and decode failures are kept distinct so the session
//! controller can log them precisely; all of them are recoverable and none
//! panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AdventureRequest, AdventureResponse, ChatRequest, ChatResponse, MemoryResponse, WorldResponse,
};

pub const CHAT_PATH: &str = "/chat";
pub const MEMORY_PATH: &str = "/memory";
pub const WORLD_PATH: &str = "/world";
pub const ADVENTURE_PATH: &str = "/adventure";

/// Failure of a companion endpoint call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or no response arrived.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered outside the 2xx range.
    #[error("server error: {0}")]
    Status(u16),
    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// No browser to issue the request from.
    #[error("not available on server")]
    Unavailable,
}

/// The companion service as seen by the session controller.
#[allow(async_fn_in_trait)]
pub trait CompanionApi {
    /// `POST /chat`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status or an
    /// undecodable body.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError>;

    /// `GET /memory`.
    ///
    /// # Errors
    ///
    /// See [`CompanionApi::chat`].
    async fn memory(&self) -> Result<MemoryResponse, ApiError>;

    /// `GET /world`.
    ///
    /// # Errors
    ///
    /// See [`CompanionApi::chat`].
    async fn world(&self) -> Result<WorldResponse, ApiError>;

    /// `POST /adventure`.
    ///
    /// # Errors
    ///
    /// See [`CompanionApi::chat`].
    async fn adventure(&self, request: &AdventureRequest) -> Result<AdventureResponse, ApiError>;
}

/// Join an endpoint path onto a base URL (empty base = same origin).
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

/// HTTP implementation of [`CompanionApi`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpCompanionApi {
    base_url: String,
}

impl HttpCompanionApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(resp).await
}

impl CompanionApi for HttpCompanionApi {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.url(CHAT_PATH), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn memory(&self) -> Result<MemoryResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            get_json(&self.url(MEMORY_PATH)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn world(&self) -> Result<WorldResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            get_json(&self.url(WORLD_PATH)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn adventure(&self, request: &AdventureRequest) -> Result<AdventureResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.url(ADVENTURE_PATH), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
