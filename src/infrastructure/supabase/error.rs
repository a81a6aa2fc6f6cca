use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::errors::StoreError;

/// Errors that can occur when querying the Supabase REST API
#[derive(Error, Debug)]
pub enum SupabaseError {
    /// Network error occurred during request
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// API key missing, expired, or lacking access to the table
    #[error("Authentication failed ({0}): {1}")]
    AuthenticationFailed(StatusCode, String),

    /// Any other non-success status
    #[error("Unexpected status {0}: {1}")]
    UnexpectedStatus(StatusCode, String),

    /// Response body was not the expected JSON rows
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Client could not be constructed
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl SupabaseError {
    /// Classify a non-success response.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Self::AuthenticationFailed(status, body)
            }
            _ => Self::UnexpectedStatus(status, body),
        }
    }
}

impl From<reqwest::Error> for SupabaseError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err)
        }
    }
}

impl From<SupabaseError> for StoreError {
    fn from(err: SupabaseError) -> Self {
        match err {
            SupabaseError::AuthenticationFailed(..) => Self::RemoteAuth(err.to_string()),
            SupabaseError::Decode(msg) => Self::Decode(msg),
            other => Self::Remote(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classification() {
        assert!(matches!(
            SupabaseError::from_status(StatusCode::UNAUTHORIZED, "JWT expired".into()),
            SupabaseError::AuthenticationFailed(..)
        ));
        assert!(matches!(
            SupabaseError::from_status(StatusCode::FORBIDDEN, String::new()),
            SupabaseError::AuthenticationFailed(..)
        ));
        assert!(matches!(
            SupabaseError::from_status(StatusCode::BAD_GATEWAY, String::new()),
            SupabaseError::UnexpectedStatus(..)
        ));
    }

    #[test]
    fn test_store_error_mapping() {
        let auth: StoreError =
            SupabaseError::from_status(StatusCode::UNAUTHORIZED, "JWT expired".into()).into();
        assert!(matches!(auth, StoreError::RemoteAuth(ref msg) if msg.contains("JWT expired")));

        let decode: StoreError = SupabaseError::Decode("expected array".into()).into();
        assert!(matches!(decode, StoreError::Decode(_)));

        let other: StoreError =
            SupabaseError::from_status(StatusCode::SERVICE_UNAVAILABLE, "down".into()).into();
        assert!(matches!(other, StoreError::Remote(_)));
    }
}
