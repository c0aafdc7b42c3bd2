//! HTTP client for the Roster API

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Successful submission as reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddedName {
    pub success: bool,
    /// The name as stored (trimmed)
    pub name: String,
    /// Number of names after this submission
    pub total: usize,
}

/// Operations the page controller needs from the name store
#[async_trait]
pub trait NamesApi: Send + Sync {
    /// Current roster, oldest first
    async fn list_names(&self) -> Result<Vec<String>, ClientError>;

    /// Submit a name for appending
    async fn add_name(&self, name: &str) -> Result<AddedName, ClientError>;
}

/// HTTP client for communicating with the Roster API
#[derive(Clone)]
pub struct RosterClient {
    client: reqwest::Client,
    base_url: String,
}

impl RosterClient {
    /// Create a new client from environment variables
    ///
    /// Optional env vars:
    /// - ROSTER_API_URL: Base URL of the API (default http://localhost:5000)
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("ROSTER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&base_url)
    }

    /// Create a new client with explicit configuration
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // --- Internal helpers ---

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        handle_json_response(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await?;

        handle_json_response(response).await
    }
}

#[async_trait]
impl NamesApi for RosterClient {
    async fn list_names(&self) -> Result<Vec<String>, ClientError> {
        let list: NameList = self.get_json("/api/names").await?;
        Ok(list.names)
    }

    async fn add_name(&self, name: &str) -> Result<AddedName, ClientError> {
        self.post_json("/api/names", &AddNameRequest { name }).await
    }
}

async fn handle_json_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    parse_response(status, &body)
}

/// Map a status and body onto the typed result or the matching error
fn parse_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ClientError> {
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|e| e.error)
            .ok();

        return Err(match (status, message) {
            (StatusCode::BAD_REQUEST, Some(message)) => ClientError::Validation(message),
            (_, message) => ClientError::Api {
                status: status.as_u16(),
                message: message.unwrap_or_else(|| body.to_string()),
            },
        });
    }

    serde_json::from_str(body).map_err(|e| ClientError::Deserialization(e.to_string()))
}

// --- Wire Types ---

#[derive(Debug, Serialize)]
struct AddNameRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct NameList {
    names: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}
