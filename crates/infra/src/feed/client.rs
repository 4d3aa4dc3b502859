//! Change feed client
//!
//! Single-attempt HTTP adapter over the calendar delta feed. Every response
//! is reduced at receipt: records are deserialized and continuation links
//! are stripped down to their bare tokens.

use std::sync::Arc;

use async_trait::async_trait;
use deltafeed_core::{ChangePage, ChangeSource, PageRequest};
use deltafeed_domain::{DeltaFeedError, RawChangeRecord, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::continuation;
use super::token::TokenProvider;
use crate::errors::InfraError;

/// HTTP adapter for the appointment change feed.
pub struct GraphChangeFeed {
    client: Client,
    tokens: Arc<dyn TokenProvider>,
    base_url: String,
    page_size: u32,
}

impl GraphChangeFeed {
    pub fn new(
        client: Client,
        tokens: Arc<dyn TokenProvider>,
        base_url: impl Into<String>,
        page_size: u32,
    ) -> Self {
        Self { client, tokens, base_url: base_url.into(), page_size }
    }

    fn query_params(request: &PageRequest) -> Vec<(&'static str, String)> {
        match request {
            PageRequest::Window { start, end } => {
                vec![("startDateTime", start.clone()), ("endDateTime", end.clone())]
            }
            PageRequest::Resume { delta_token } => vec![("$deltatoken", delta_token.clone())],
            PageRequest::Continue { page_token } => vec![("$skiptoken", page_token.clone())],
        }
    }
}

#[async_trait]
impl ChangeSource for GraphChangeFeed {
    async fn fetch_page(&self, request: &PageRequest) -> Result<ChangePage> {
        let access_token = self.tokens.access_token().await?;
        let url = format!("{}/me/calendarView/delta", self.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&access_token)
            .header("Prefer", format!("odata.maxpagesize={}", self.page_size))
            .query(&Self::query_params(request))
            .send()
            .await
            .map_err(|e| {
                InfraError(DeltaFeedError::Network(format!("Change feed request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(InfraError(DeltaFeedError::Network(format!(
                "Change feed error ({}): {}",
                status, error_text
            )))
            .into());
        }

        let envelope: DeltaEnvelope = response.json().await.map_err(|e| {
            InfraError(DeltaFeedError::InvalidInput(format!(
                "Failed to parse change feed response: {}",
                e
            )))
        })?;

        let next_page_token = envelope.next_link.as_deref().and_then(|link| {
            let token = continuation::page_token(link);
            if token.is_none() {
                warn!(link, "next link carried no page token, treating as absent");
            }
            token
        });
        let delta_token = envelope.delta_link.as_deref().and_then(|link| {
            let token = continuation::delta_token(link);
            if token.is_none() {
                warn!(link, "delta link carried no change cursor, treating as absent");
            }
            token
        });

        debug!(
            records = envelope.value.len(),
            has_next = next_page_token.is_some(),
            has_delta = delta_token.is_some(),
            "change feed page received"
        );

        Ok(ChangePage { records: envelope.value, next_page_token, delta_token })
    }
}

#[derive(Debug, Deserialize)]
struct DeltaEnvelope {
    #[serde(default)]
    value: Vec<RawChangeRecord>,
    #[serde(rename = "@odata.nextLink")]
    next_link: Option<String>,
    #[serde(rename = "@odata.deltaLink")]
    delta_link: Option<String>,
}
