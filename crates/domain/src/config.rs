//! Run configuration
//!
//! A single value object constructed once at startup and passed explicitly
//! into the sync driver. The environment/file loader lives in
//! `deltafeed-infra`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BUCKET_PREFIX, DEFAULT_GRAPH_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_TOKEN_URL,
};

/// Full-window bounds used when no resume cursor is available.
///
/// Bounds are passed to the change feed verbatim; the remote service owns
/// their validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunWindow {
    pub start: String,
    pub end: String,
}

/// Application configuration for one sync run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// OAuth client id used for the credential grant.
    pub client_id: String,
    pub username: String,
    pub password: String,
    /// Bucket holding the cursor, audit trail and export artifacts.
    pub bucket: String,
    /// Key prefix shared by everything this job writes.
    #[serde(default = "default_bucket_prefix")]
    pub bucket_prefix: String,
    /// Object name (under the prefix) of the latest cursor.
    pub cursor_key: String,
    /// Window queried when no cursor can be resumed.
    pub window: RunWindow,
    /// Page-size hint sent with every feed request.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_graph_base_url")]
    pub graph_base_url: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// Local directory the export file is spooled to before upload.
    #[serde(default = "default_spool_dir")]
    pub spool_dir: PathBuf,
}

fn default_bucket_prefix() -> String {
    DEFAULT_BUCKET_PREFIX.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_graph_base_url() -> String {
    DEFAULT_GRAPH_BASE_URL.to_string()
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

fn default_spool_dir() -> PathBuf {
    std::env::temp_dir()
}
