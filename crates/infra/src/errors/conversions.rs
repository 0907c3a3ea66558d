//! Conversions from external infrastructure errors into domain errors.

use std::io::Error as IoError;

use caliber_domain::CaliberError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub CaliberError);

impl From<InfraError> for CaliberError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<CaliberError> for InfraError {
    fn from(value: CaliberError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoCaliberError {
    fn into_caliber(self) -> CaliberError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → CaliberError */
/* -------------------------------------------------------------------------- */

impl IntoCaliberError for HttpError {
    fn into_caliber(self) -> CaliberError {
        if self.is_timeout() {
            return CaliberError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return CaliberError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return CaliberError::Serialization(format!("HTTP body decode failed: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => CaliberError::Auth(message),
                404 => CaliberError::NotFound(message),
                400..=499 => CaliberError::InvalidInput(message),
                _ => CaliberError::Network(message),
            };
        }

        CaliberError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_caliber())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → CaliberError */
/* -------------------------------------------------------------------------- */

impl IntoCaliberError for JsonError {
    fn into_caliber(self) -> CaliberError {
        CaliberError::Serialization(format!(
            "invalid JSON at line {} column {}: {}",
            self.line(),
            self.column(),
            self
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_caliber())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → CaliberError */
/* -------------------------------------------------------------------------- */

impl IntoCaliberError for IoError {
    fn into_caliber(self) -> CaliberError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::NotFound => CaliberError::NotFound(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                CaliberError::Storage(format!("permission denied: {self}"))
            }
            _ => CaliberError::Storage(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_caliber())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → CaliberError */
/* -------------------------------------------------------------------------- */

impl IntoCaliberError for TomlError {
    fn into_caliber(self) -> CaliberError {
        CaliberError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_caliber())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
