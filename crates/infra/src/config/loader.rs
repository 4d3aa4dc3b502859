//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `DELTAFEED_CLIENT_ID`: OAuth client id for the credential grant
//! - `DELTAFEED_USERNAME`: Account the change feed is read as
//! - `DELTAFEED_PASSWORD`: Account password
//! - `DELTAFEED_BUCKET`: Bucket holding cursor, audit and export artifacts
//! - `DELTAFEED_BUCKET_PREFIX`: Key prefix for everything written (optional)
//! - `DELTAFEED_CURSOR_KEY`: Object name of the latest cursor
//! - `DELTAFEED_WINDOW_START`: Full-window start bound
//! - `DELTAFEED_WINDOW_END`: Full-window end bound
//! - `DELTAFEED_PAGE_SIZE`: Page-size hint per feed request (optional)
//! - `DELTAFEED_GRAPH_BASE_URL`: Change feed base URL (optional)
//! - `DELTAFEED_TOKEN_URL`: Identity endpoint for the credential grant (optional)
//! - `DELTAFEED_SPOOL_DIR`: Local spool directory for the export file (optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./deltafeed.json` or `./deltafeed.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use deltafeed_domain::constants::{
    DEFAULT_BUCKET_PREFIX, DEFAULT_GRAPH_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_TOKEN_URL,
};
use deltafeed_domain::{AppConfig, DeltaFeedError, Result, RunWindow};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `DeltaFeedError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<AppConfig> {
    // Try loading from environment first
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            // Fall back to file
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// All required environment variables must be present. Optional variables
/// fall back to the documented defaults.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `DeltaFeedError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<AppConfig> {
    let client_id = env_var("DELTAFEED_CLIENT_ID")?;
    let username = env_var("DELTAFEED_USERNAME")?;
    let password = env_var("DELTAFEED_PASSWORD")?;
    let bucket = env_var("DELTAFEED_BUCKET")?;
    let cursor_key = env_var("DELTAFEED_CURSOR_KEY")?;
    let window = RunWindow {
        start: env_var("DELTAFEED_WINDOW_START")?,
        end: env_var("DELTAFEED_WINDOW_END")?,
    };

    let bucket_prefix = std::env::var("DELTAFEED_BUCKET_PREFIX")
        .unwrap_or_else(|_| DEFAULT_BUCKET_PREFIX.to_string());
    let page_size = match std::env::var("DELTAFEED_PAGE_SIZE") {
        Ok(raw) => raw
            .parse::<u32>()
            .map_err(|e| DeltaFeedError::Config(format!("Invalid page size: {}", e)))?,
        Err(_) => DEFAULT_PAGE_SIZE,
    };
    let graph_base_url = std::env::var("DELTAFEED_GRAPH_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_GRAPH_BASE_URL.to_string());
    let token_url =
        std::env::var("DELTAFEED_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string());
    let spool_dir = std::env::var("DELTAFEED_SPOOL_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir());

    Ok(AppConfig {
        client_id,
        username,
        password,
        bucket,
        bucket_prefix,
        cursor_key,
        window,
        page_size,
        graph_base_url,
        token_url,
        spool_dir,
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `DeltaFeedError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<AppConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DeltaFeedError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DeltaFeedError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DeltaFeedError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Arguments
/// * `contents` - File contents as string
/// * `path` - Path to the file (for format detection and error messages)
///
/// # Errors
/// Returns `DeltaFeedError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DeltaFeedError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DeltaFeedError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(DeltaFeedError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./deltafeed.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Try current working directory
    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("deltafeed.json"),
            cwd.join("deltafeed.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
            cwd.join("../../config.json"),
            cwd.join("../../config.toml"),
        ]);
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("deltafeed.json"),
                exe_dir.join("deltafeed.toml"),
                exe_dir.join("../config.json"),
                exe_dir.join("../config.toml"),
                exe_dir.join("../../config.json"),
                exe_dir.join("../../config.toml"),
            ]);
        }
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `DeltaFeedError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        DeltaFeedError::Config(format!("Missing required environment variable: {}", key))
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const REQUIRED_VARS: [&str; 7] = [
        "DELTAFEED_CLIENT_ID",
        "DELTAFEED_USERNAME",
        "DELTAFEED_PASSWORD",
        "DELTAFEED_BUCKET",
        "DELTAFEED_CURSOR_KEY",
        "DELTAFEED_WINDOW_START",
        "DELTAFEED_WINDOW_END",
    ];

    const OPTIONAL_VARS: [&str; 5] = [
        "DELTAFEED_BUCKET_PREFIX",
        "DELTAFEED_PAGE_SIZE",
        "DELTAFEED_GRAPH_BASE_URL",
        "DELTAFEED_TOKEN_URL",
        "DELTAFEED_SPOOL_DIR",
    ];

    fn set_required_vars() {
        std::env::set_var("DELTAFEED_CLIENT_ID", "client-1");
        std::env::set_var("DELTAFEED_USERNAME", "svc@example.org");
        std::env::set_var("DELTAFEED_PASSWORD", "hunter2");
        std::env::set_var("DELTAFEED_BUCKET", "exports");
        std::env::set_var("DELTAFEED_CURSOR_KEY", "deltatoken.txt");
        std::env::set_var("DELTAFEED_WINDOW_START", "2021-06-01T00:00:00.0000000");
        std::env::set_var("DELTAFEED_WINDOW_END", "2021-06-30T00:00:00.0000000");
    }

    fn clear_all_vars() {
        for key in REQUIRED_VARS.iter().chain(OPTIONAL_VARS.iter()) {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        set_required_vars();
        std::env::set_var("DELTAFEED_BUCKET_PREFIX", "custom-prefix");
        std::env::set_var("DELTAFEED_PAGE_SIZE", "50");
        std::env::set_var("DELTAFEED_GRAPH_BASE_URL", "https://graph.example.org/v1.0");
        std::env::set_var("DELTAFEED_TOKEN_URL", "https://login.example.org/token");
        std::env::set_var("DELTAFEED_SPOOL_DIR", "/var/spool/deltafeed");

        let result = load_from_env();
        assert!(result.is_ok(), "Should load config from env vars, error: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.client_id, "client-1");
        assert_eq!(config.username, "svc@example.org");
        assert_eq!(config.password, "hunter2");
        assert_eq!(config.bucket, "exports");
        assert_eq!(config.bucket_prefix, "custom-prefix");
        assert_eq!(config.cursor_key, "deltatoken.txt");
        assert_eq!(config.window.start, "2021-06-01T00:00:00.0000000");
        assert_eq!(config.window.end, "2021-06-30T00:00:00.0000000");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.graph_base_url, "https://graph.example.org/v1.0");
        assert_eq!(config.token_url, "https://login.example.org/token");
        assert_eq!(config.spool_dir, PathBuf::from("/var/spool/deltafeed"));

        clear_all_vars();
    }

    #[test]
    fn test_load_from_env_optional_vars_default() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        clear_all_vars();
        set_required_vars();

        let result = load_from_env();
        assert!(result.is_ok(), "Should load config from env vars, error: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.bucket_prefix, DEFAULT_BUCKET_PREFIX);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.graph_base_url, DEFAULT_GRAPH_BASE_URL);
        assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(config.spool_dir, std::env::temp_dir());

        clear_all_vars();
    }

    #[test]
    fn test_load_from_env_missing_var() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        clear_all_vars();
        set_required_vars();
        std::env::remove_var("DELTAFEED_PASSWORD");

        let result = load_from_env();
        assert!(result.is_err(), "Should fail with missing env var");

        let err = result.unwrap_err();
        match err {
            DeltaFeedError::Config(msg) => assert!(msg.contains("DELTAFEED_PASSWORD")),
            other => panic!("Should be a Config error, got {:?}", other),
        }

        clear_all_vars();
    }

    #[test]
    fn test_load_from_env_invalid_page_size() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        clear_all_vars();
        set_required_vars();
        std::env::set_var("DELTAFEED_PAGE_SIZE", "not-a-number");

        let result = load_from_env();
        assert!(result.is_err(), "Should fail with invalid page size");

        let err = result.unwrap_err();
        assert!(matches!(err, DeltaFeedError::Config(_)), "Should be a Config error");

        clear_all_vars();
    }

    #[test]
    fn test_load_from_file_json() {
        let json_content = r#"{
            "client_id": "file-client",
            "username": "svc@example.org",
            "password": "hunter2",
            "bucket": "exports",
            "cursor_key": "deltatoken.txt",
            "window": {
                "start": "2021-06-01T00:00:00.0000000",
                "end": "2021-06-30T00:00:00.0000000"
            },
            "page_size": 25
        }"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_ok(), "Should load config from JSON file");

        let config = result.unwrap();
        assert_eq!(config.client_id, "file-client");
        assert_eq!(config.bucket, "exports");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.bucket_prefix, DEFAULT_BUCKET_PREFIX);

        // Cleanup
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_toml() {
        let toml_content = r#"
client_id = "file-client"
username = "svc@example.org"
password = "hunter2"
bucket = "exports"
bucket_prefix = "toml-prefix"
cursor_key = "deltatoken.txt"

[window]
start = "2021-06-01T00:00:00.0000000"
end = "2021-06-30T00:00:00.0000000"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_ok(), "Should load config from TOML file");

        let config = result.unwrap();
        assert_eq!(config.client_id, "file-client");
        assert_eq!(config.bucket_prefix, "toml-prefix");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.window.start, "2021-06-01T00:00:00.0000000");

        // Cleanup
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/config.json")));
        assert!(result.is_err(), "Should fail when file not found");

        let err = result.unwrap_err();
        assert!(matches!(err, DeltaFeedError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let invalid_json = r#"{ "this is": "not valid json" "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(invalid_json.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        assert!(result.is_err(), "Should fail with invalid JSON");

        // Cleanup
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let content = "some content";
        let path = PathBuf::from("test.yaml");
        let result = parse_config(content, &path);
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
