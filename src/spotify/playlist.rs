use async_trait::async_trait;
use reqwest::{Method, Url};

use crate::{
    error::RemoteServiceError,
    spotify::{PlaylistApi, Session, check_status},
    types::{Page, Playlist, PlaylistItem, PlaylistItemsRequest},
};

const PLAYLISTS_PAGE_LIMIT: &str = "50";
const TRACKS_PAGE_LIMIT: &str = "100";

/// Only the fields the interleaving reads; keeps pages small.
const TRACK_FIELDS: &str = "items(added_by.id,is_local,track(uri)),next,total";

impl Session {
    fn first_playlists_url(&self) -> Result<String, RemoteServiceError> {
        let url = Url::parse_with_params(
            &format!("{uri}/me/playlists", uri = self.api_url),
            &[("limit", PLAYLISTS_PAGE_LIMIT)],
        )
        .map_err(invalid_url)?;
        Ok(url.into())
    }

    fn first_tracks_url(&self, playlist_id: &str) -> Result<String, RemoteServiceError> {
        let url = Url::parse_with_params(
            &format!(
                "{uri}/playlists/{id}/tracks",
                uri = self.api_url,
                id = playlist_id
            ),
            &[("limit", TRACKS_PAGE_LIMIT), ("fields", TRACK_FIELDS)],
        )
        .map_err(invalid_url)?;
        Ok(url.into())
    }

    async fn send_items(
        &self,
        method: Method,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), RemoteServiceError> {
        let api_url = format!(
            "{uri}/playlists/{id}/tracks",
            uri = self.api_url,
            id = playlist_id
        );
        let body = PlaylistItemsRequest {
            uris: uris.to_vec(),
        };

        let response = self
            .client
            .request(method, &api_url)
            .bearer_auth(&self.token.access_token)
            .json(&body)
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }
}

#[async_trait]
impl PlaylistApi for Session {
    async fn current_user_playlists_page(
        &self,
        next: Option<&str>,
    ) -> Result<Page<Playlist>, RemoteServiceError> {
        let api_url = match next {
            Some(url) => url.to_string(),
            None => self.first_playlists_url()?,
        };
        self.get_json(&api_url).await
    }

    async fn playlist_tracks_page(
        &self,
        playlist_id: &str,
        next: Option<&str>,
    ) -> Result<Page<PlaylistItem>, RemoteServiceError> {
        let api_url = match next {
            Some(url) => url.to_string(),
            None => self.first_tracks_url(playlist_id)?,
        };
        self.get_json(&api_url).await
    }

    async fn replace_playlist_items(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), RemoteServiceError> {
        self.send_items(Method::PUT, playlist_id, uris).await
    }

    async fn add_playlist_items(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), RemoteServiceError> {
        self.send_items(Method::POST, playlist_id, uris).await
    }
}

fn invalid_url(err: impl std::fmt::Display) -> RemoteServiceError {
    RemoteServiceError::Status {
        status: reqwest::StatusCode::BAD_REQUEST,
        message: format!("Invalid API URL: {}", err),
    }
}
