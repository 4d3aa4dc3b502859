//! Conversions from external infrastructure errors into domain errors.

use csv::Error as CsvError;
use deltafeed_domain::DeltaFeedError;
use object_store::Error as StoreError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DeltaFeedError);

impl From<InfraError> for DeltaFeedError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DeltaFeedError> for InfraError {
    fn from(value: DeltaFeedError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoDeltaFeedError {
    fn into_deltafeed(self) -> DeltaFeedError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DeltaFeedError */
/* -------------------------------------------------------------------------- */

impl IntoDeltaFeedError for HttpError {
    fn into_deltafeed(self) -> DeltaFeedError {
        if self.is_timeout() {
            return DeltaFeedError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return DeltaFeedError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => DeltaFeedError::Auth(message),
                404 => DeltaFeedError::NotFound(message),
                429 => DeltaFeedError::Network(message),
                400..=499 => DeltaFeedError::InvalidInput(message),
                500..=599 => DeltaFeedError::Network(message),
                _ => DeltaFeedError::Network(message),
            };
        }

        DeltaFeedError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_deltafeed())
    }
}

/* -------------------------------------------------------------------------- */
/* object_store::Error → DeltaFeedError */
/* -------------------------------------------------------------------------- */

impl IntoDeltaFeedError for StoreError {
    fn into_deltafeed(self) -> DeltaFeedError {
        match self {
            StoreError::NotFound { path, .. } => {
                DeltaFeedError::NotFound(format!("object not found: {path}"))
            }
            StoreError::InvalidPath { source } => {
                DeltaFeedError::InvalidInput(format!("invalid object path: {source}"))
            }
            other => DeltaFeedError::Storage(other.to_string()),
        }
    }
}

impl From<StoreError> for InfraError {
    fn from(value: StoreError) -> Self {
        InfraError(value.into_deltafeed())
    }
}

/* -------------------------------------------------------------------------- */
/* csv::Error → DeltaFeedError */
/* -------------------------------------------------------------------------- */

impl IntoDeltaFeedError for CsvError {
    fn into_deltafeed(self) -> DeltaFeedError {
        DeltaFeedError::Export(self.to_string())
    }
}

impl From<CsvError> for InfraError {
    fn from(value: CsvError) -> Self {
        InfraError(value.into_deltafeed())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → DeltaFeedError */
/* -------------------------------------------------------------------------- */

impl IntoDeltaFeedError for std::io::Error {
    fn into_deltafeed(self) -> DeltaFeedError {
        DeltaFeedError::Export(format!("I/O failure: {self}"))
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_deltafeed())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
