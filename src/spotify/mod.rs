//! # Spotify Integration Module
//!
//! The integration layer between plweave and the Spotify Web API.
//!
//! ```text
//! CLI Layer
//!     ↓
//! Sort pipeline (fetch → group → interleave → write)
//!     ↓
//! PlaylistApi trait  ←  Session (this module)
//!     ↓
//! HTTP Layer (reqwest, JSON)
//!     ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication
//!
//! [`auth`] runs the OAuth 2.0 authorization code flow: the authorize URL is
//! opened in the browser, a temporary local server receives the redirect and
//! the code is exchanged for an access token using the client secret. The
//! resulting [`Session`] is the only handle to the authenticated API; it is
//! passed by reference to everything that talks to Spotify. Tokens are not
//! refreshed or cached between runs.
//!
//! ## Endpoints
//!
//! - `GET /me/playlists` - playlists of the current user, 50 per page
//! - `GET /playlists/{id}/tracks` - playlist rows, 100 per page
//! - `PUT /playlists/{id}/tracks` - replace the playlist content (≤100 URIs)
//! - `POST /playlists/{id}/tracks` - append to the playlist (≤100 URIs)
//!
//! ## Errors
//!
//! Every call returns [`RemoteServiceError`]. Nothing is retried: HTTP 429
//! becomes [`RemoteServiceError::RateLimited`] with the `Retry-After` value,
//! any other non-success status becomes [`RemoteServiceError::Status`] with the
//! message Spotify sent.

pub mod auth;
pub mod playlist;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    config,
    error::RemoteServiceError,
    types::{ApiErrorResponse, Page, Playlist, PlaylistItem, Token},
};

/// The remote playlist operations the sort pipeline depends on.
///
/// `next` is the absolute URL from the previous page; `None` requests the
/// first page.
#[async_trait]
pub trait PlaylistApi: Send + Sync {
    async fn current_user_playlists_page(
        &self,
        next: Option<&str>,
    ) -> Result<Page<Playlist>, RemoteServiceError>;

    async fn playlist_tracks_page(
        &self,
        playlist_id: &str,
        next: Option<&str>,
    ) -> Result<Page<PlaylistItem>, RemoteServiceError>;

    /// Clears the playlist and sets its content to `uris` (at most 100).
    async fn replace_playlist_items(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), RemoteServiceError>;

    /// Appends `uris` (at most 100) to the end of the playlist.
    async fn add_playlist_items(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), RemoteServiceError>;
}

/// An authenticated connection to the Web API.
pub struct Session {
    client: Client,
    api_url: String,
    token: Token,
}

impl Session {
    pub fn new(token: Token) -> Self {
        Self::with_api_url(token, config::spotify_apiurl())
    }

    pub fn with_api_url(token: Token, api_url: String) -> Self {
        Session {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RemoteServiceError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token.access_token)
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Maps a non-success response onto [`RemoteServiceError`].
async fn check_status(response: Response) -> Result<Response, RemoteServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        return Err(RemoteServiceError::RateLimited { retry_after });
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(api_error) => api_error.error.message,
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
        Err(_) => body,
    };

    Err(RemoteServiceError::Status { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http;

    fn response(status: u16, headers: &[(&str, &str)], body: &'static str) -> Response {
        let mut builder = http::Response::builder().status(status);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        Response::from(builder.body(body).unwrap())
    }

    async fn status_error(response: Response) -> RemoteServiceError {
        match check_status(response).await {
            Ok(_) => panic!("expected an error status"),
            Err(e) => e,
        }
    }

    #[tokio::test]
    async fn success_passes_through() {
        let response = check_status(response(200, &[], "{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn too_many_requests_reads_retry_after() {
        let err = status_error(response(429, &[("Retry-After", "7")], "")).await;
        assert!(matches!(
            err,
            RemoteServiceError::RateLimited {
                retry_after: Some(7)
            }
        ));
        assert_eq!(err.to_string(), "Rate limited by Spotify. Try again in 7 seconds.");
    }

    #[tokio::test]
    async fn too_many_requests_without_usable_retry_after() {
        let err = status_error(response(429, &[], "")).await;
        assert!(matches!(
            err,
            RemoteServiceError::RateLimited { retry_after: None }
        ));

        let err = status_error(response(429, &[("Retry-After", "soon")], "")).await;
        assert!(matches!(
            err,
            RemoteServiceError::RateLimited { retry_after: None }
        ));
    }

    #[tokio::test]
    async fn error_body_message_is_used() {
        let body = r#"{"error":{"status":403,"message":"Insufficient client scope"}}"#;
        let err = status_error(response(403, &[], body)).await;

        assert!(matches!(
            err,
            RemoteServiceError::Status {
                status: StatusCode::FORBIDDEN,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "Spotify responded with 403 Forbidden: Insufficient client scope"
        );
    }

    #[tokio::test]
    async fn empty_body_falls_back_to_reason_phrase() {
        let err = status_error(response(502, &[], "")).await;
        assert_eq!(
            err.to_string(),
            "Spotify responded with 502 Bad Gateway: Bad Gateway"
        );
    }

    #[tokio::test]
    async fn non_json_body_is_kept_as_message() {
        let err = status_error(response(500, &[], "upstream down")).await;
        assert_eq!(
            err.to_string(),
            "Spotify responded with 500 Internal Server Error: upstream down"
        );
    }
}
