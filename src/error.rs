use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for every operation the tool performs.
///
/// - `Validation` is raised before any network call (missing credentials,
///   no playlist selected).
/// - `Auth` covers the authorization handshake and the token exchange.
/// - `Remote` wraps any failing Web API call made with a valid session.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error(transparent)]
    Remote(#[from] RemoteServiceError),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failure of a single Web API request.
#[derive(Error, Debug)]
pub enum RemoteServiceError {
    #[error("Request to Spotify failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Spotify responded with {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("{}", rate_limited_message(.retry_after))]
    RateLimited { retry_after: Option<u64> },
}

fn rate_limited_message(retry_after: &Option<u64>) -> String {
    match retry_after {
        Some(secs) => format!("Rate limited by Spotify. Try again in {} seconds.", secs),
        None => "Rate limited by Spotify. Try again later.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_message_includes_retry_after() {
        let err = RemoteServiceError::RateLimited {
            retry_after: Some(30),
        };
        assert_eq!(
            err.to_string(),
            "Rate limited by Spotify. Try again in 30 seconds."
        );
    }

    #[test]
    fn rate_limit_message_without_retry_after() {
        let err = RemoteServiceError::RateLimited { retry_after: None };
        assert_eq!(err.to_string(), "Rate limited by Spotify. Try again later.");
    }

    #[test]
    fn remote_error_converts_into_top_level() {
        let err: Error = RemoteServiceError::Status {
            status: StatusCode::FORBIDDEN,
            message: "Insufficient client scope".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Remote(_)));
        assert!(err.to_string().contains("Insufficient client scope"));
    }
}
