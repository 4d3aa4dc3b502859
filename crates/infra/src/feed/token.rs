//! Access token acquisition
//!
//! Resource-owner credential grant against the identity endpoint. The token
//! is fetched once per run and reused for every page request.

use async_trait::async_trait;
use deltafeed_domain::constants::GRAPH_SCOPE;
use deltafeed_domain::{AppConfig, DeltaFeedError, Result};
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::errors::InfraError;

/// Supplies bearer tokens for feed requests.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn access_token(&self) -> Result<String>;
}

/// Username/password credential grant against the identity endpoint.
pub struct RopcTokenProvider {
    client: Client,
    token_url: String,
    client_id: String,
    username: String,
    password: String,
    cached: OnceCell<String>,
}

impl RopcTokenProvider {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        Self {
            client,
            token_url: config.token_url.clone(),
            client_id: config.client_id.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            cached: OnceCell::new(),
        }
    }

    async fn request_token(&self) -> Result<String> {
        let response = self
            .client
            .post(&self.token_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("grant_type", "password"),
                ("username", self.username.as_str()),
                ("password", self.password.as_str()),
                ("scope", GRAPH_SCOPE),
            ])
            .send()
            .await
            .map_err(|e| {
                InfraError(DeltaFeedError::Auth(format!("Token request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(InfraError(DeltaFeedError::Auth(format!(
                "Token request failed ({}): {}",
                status, error_text
            )))
            .into());
        }

        let token_response: TokenResponse = response.json().await.map_err(|e| {
            InfraError(DeltaFeedError::Auth(format!("Failed to parse token response: {}", e)))
        })?;

        debug!(expires_in = token_response.expires_in, "access token acquired");
        Ok(token_response.access_token)
    }
}

#[async_trait]
impl TokenProvider for RopcTokenProvider {
    async fn access_token(&self) -> Result<String> {
        let token = self.cached.get_or_try_init(|| self.request_token()).await?;
        Ok(token.clone())
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}
