//! Error taxonomy of the crate.

use reqwest::StatusCode;
use thiserror::Error;

/// Everything a lookup can fail with.
///
/// Errors are never retried or recovered internally; the only local recovery
/// is the `find_*` client methods, which turn [`Error::NotFound`] into
/// `Ok(None)` and propagate the rest unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// The query was rejected locally, before any network call.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The provider rejected the API key (HTTP 401).
    #[error("invalid API key")]
    Authentication,

    /// The provider found no location matching the query (HTTP 404).
    #[error("no location matched the query")]
    NotFound,

    /// The response body was not valid JSON or lacked a required field.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The provider replied with a status this crate has no contract for.
    #[error("unexpected response status: {0}")]
    UnexpectedResponse(StatusCode),

    /// The client was built without a usable API key.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The underlying HTTP transport failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_cause() {
        assert_eq!(Error::Authentication.to_string(), "invalid API key");
        assert_eq!(Error::NotFound.to_string(), "no location matched the query");

        let err = Error::UnexpectedResponse(StatusCode::IM_A_TEAPOT);
        assert!(err.to_string().contains("418"));
    }
}
