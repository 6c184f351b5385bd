//! Library error type
//!
//! Every fallible operation in the crate returns [`Result`]. Identifier
//! problems are reported before any request is sent; everything else maps to
//! one failure point of a single GET.

use crate::resource::ResourceKind;
use reqwest::StatusCode;

/// Result alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The identifier is neither a positive id nor a valid resource name
    #[error("invalid identifier '{input}': {reason}")]
    InvalidIdentifier { input: String, reason: &'static str },

    /// A name was given for a resource type that is only addressable by id
    #[error("{kind} can only be fetched by numeric id")]
    NameNotSupported { kind: ResourceKind },

    /// The API answered with something other than 200 OK
    #[error("expected status 200 but received {status} for {url}")]
    Status { status: StatusCode, url: String },

    /// Transport-level failure (connect, timeout, body read)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The body was not valid JSON or did not match the record schema
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL could not be parsed
    #[error("invalid base url: {0}")]
    Url(#[from] url::ParseError),

    /// A resource reference points at a different resource type
    #[error("reference points to {found}, expected {expected}")]
    ResourceMismatch { expected: ResourceKind, found: String },

    /// The endpoint name does not match any known resource type
    #[error("unknown resource type '{0}'")]
    UnknownResource(String),
}

impl Error {
    /// HTTP status of a rejected response, if this error came from one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Request(err) => err.status(),
            _ => None,
        }
    }

    /// True when the error was raised before any request was sent
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            Error::InvalidIdentifier { .. }
                | Error::NameNotSupported { .. }
                | Error::Url(_)
                | Error::ResourceMismatch { .. }
                | Error::UnknownResource(_)
        )
    }
}

/// Format an API error for display
pub fn format_api_error(error: &Error) -> String {
    match error.status().map(|s| s.as_u16()) {
        Some(404) => return "Resource not found.".to_string(),
        Some(429) => return "Rate limit exceeded. Please try again later.".to_string(),
        Some(400) => return "Invalid request. Check the resource type and identifier.".to_string(),
        Some(500..=599) => {
            return "PokeAPI temporarily unavailable. Please try again.".to_string()
        }
        _ => {}
    }

    if let Error::Request(err) = error {
        if err.is_timeout() {
            return "Request timed out. Check your network connection.".to_string();
        }
        if err.is_connect() {
            return "Could not connect to the API. Check the base url.".to_string();
        }
    }

    error.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_carries_code_and_url() {
        let err = Error::Status {
            status: StatusCode::NOT_FOUND,
            url: "https://pokeapi.co/api/v2/pokemon/missingno/".to_string(),
        };

        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("missingno"));
        assert!(!err.is_client_side());
    }

    #[test]
    fn test_identifier_errors_are_client_side() {
        let err = Error::InvalidIdentifier {
            input: "Pikachu!".to_string(),
            reason: "names may only contain lowercase letters, digits and hyphens",
        };
        assert!(err.is_client_side());
        assert_eq!(err.status(), None);

        let err = Error::NameNotSupported {
            kind: ResourceKind::Machine,
        };
        assert!(err.is_client_side());
    }

    #[test]
    fn test_format_api_error_messages() {
        let not_found = Error::Status {
            status: StatusCode::NOT_FOUND,
            url: "x".to_string(),
        };
        assert_eq!(format_api_error(&not_found), "Resource not found.");

        let unavailable = Error::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            url: "x".to_string(),
        };
        assert!(format_api_error(&unavailable).contains("temporarily unavailable"));

        let unknown = Error::UnknownResource("digimon".to_string());
        assert_eq!(format_api_error(&unknown), "unknown resource type 'digimon'");
    }
}
