//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Change feed paging
pub const DEFAULT_PAGE_SIZE: u32 = 200;

// Remote endpoints
pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.microsoft.com/v1.0";
pub const DEFAULT_TOKEN_URL: &str =
    "https://login.microsoftonline.com/organizations/oauth2/v2.0/token";
pub const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";

// Object store layout
pub const DEFAULT_BUCKET_PREFIX: &str = "RUM-CSV-data";
pub const ARTIFACT_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
// Downstream consumers key on this exact value, transposed as it is.
pub const ARTIFACT_CONTENT_TYPE: &str = "plain/text";
pub const CURSOR_CONTENT_TYPE: &str = "text/plain";

// Export format
pub const EXPORT_DELIMITER: u8 = b'|';

// Run surface
pub const COMPLETION_TEXT: &str = "CSV File generated Successfully.";
