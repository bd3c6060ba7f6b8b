//! Configuration management for plweave.
//!
//! Loads `.env` files and exposes the values the Spotify integration needs.
//! Resolution order for every value:
//! 1. Command-line flag (credentials only, wired up in `main.rs`)
//! 2. Environment variables
//! 3. `.env` in the working directory, then `.env` in the local data directory
//! 4. Built-in defaults (endpoints and redirect URI)

use reqwest::Url;
use std::{env, path::PathBuf};

use crate::error::{Error, Result};

pub const ENV_CLIENT_ID: &str = "SPOTIFY_API_AUTH_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SPOTIFY_API_AUTH_CLIENT_SECRET";
pub const ENV_REDIRECT_URI: &str = "SPOTIFY_API_REDIRECT_URI";

/// spotipy-style names, read when the `SPOTIFY_API_*` variable is unset.
pub const LEGACY_ENV_CLIENT_ID: &str = "SPOTIPY_CLIENT_ID";
pub const LEGACY_ENV_CLIENT_SECRET: &str = "SPOTIPY_CLIENT_SECRET";
pub const LEGACY_ENV_REDIRECT_URI: &str = "SPOTIPY_REDIRECT_URI";

pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8888/callback";

/// Permissions requested during authorization: read private playlists and
/// modify public and private ones.
pub const SPOTIFY_SCOPE: &str = "playlist-modify-public playlist-modify-private playlist-read-private";

/// Loads environment variables from `.env` files.
///
/// Looks in the working directory first and then in the platform-specific
/// local data directory under `plweave/.env`:
/// - Linux: `~/.local/share/plweave/.env`
/// - macOS: `~/Library/Application Support/plweave/.env`
/// - Windows: `%LOCALAPPDATA%/plweave/.env`
///
/// `dotenv` never overrides variables that are already set, so the first file
/// wins and the real environment wins over both. Missing files are skipped.
///
/// # Errors
///
/// Returns [`Error::Config`] when a file exists but cannot be parsed.
pub fn load_env() -> Result<()> {
    let mut candidates = vec![PathBuf::from(".env")];
    candidates.push(data_dir().join(".env"));

    for path in candidates.into_iter().filter(|p| p.is_file()) {
        dotenv::from_path(&path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    }

    Ok(())
}

/// Directory holding the user's `.env` and `.env.example`.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("plweave");
    path
}

/// The three values an operator must supply before authenticating.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl Credentials {
    /// Builds credentials from the environment, falling back to the default
    /// redirect URI.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds credentials from any key/value source. `SPOTIFY_API_*` wins over
    /// the matching `SPOTIPY_*` name; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, legacy: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| lookup(legacy).filter(|v| !v.trim().is_empty()))
        };

        Credentials {
            client_id: read(ENV_CLIENT_ID, LEGACY_ENV_CLIENT_ID).unwrap_or_default(),
            client_secret: read(ENV_CLIENT_SECRET, LEGACY_ENV_CLIENT_SECRET).unwrap_or_default(),
            redirect_uri: read(ENV_REDIRECT_URI, LEGACY_ENV_REDIRECT_URI)
                .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
        }
    }

    /// Replaces any value for which an override is given.
    pub fn with_overrides(
        mut self,
        client_id: Option<String>,
        client_secret: Option<String>,
        redirect_uri: Option<String>,
    ) -> Self {
        if let Some(v) = client_id {
            self.client_id = v;
        }
        if let Some(v) = client_secret {
            self.client_secret = v;
        }
        if let Some(v) = redirect_uri {
            self.redirect_uri = v;
        }
        self
    }

    /// Trims every field and checks that none is empty and that the redirect
    /// URI can be served by the local callback server.
    ///
    /// Runs before any network call.
    pub fn validate(self) -> Result<Self> {
        let creds = Credentials {
            client_id: self.client_id.trim().to_string(),
            client_secret: self.client_secret.trim().to_string(),
            redirect_uri: self.redirect_uri.trim().to_string(),
        };

        if creds.client_id.is_empty()
            || creds.client_secret.is_empty()
            || creds.redirect_uri.is_empty()
        {
            return Err(Error::Validation(
                "Please fill in all credential fields.".to_string(),
            ));
        }

        creds.redirect_url()?;
        Ok(creds)
    }

    /// Parses the redirect URI; it must be an absolute http(s) URL with a host.
    pub fn redirect_url(&self) -> Result<Url> {
        let url = Url::parse(&self.redirect_uri).map_err(|e| {
            Error::Validation(format!("Invalid redirect URI {}: {}", self.redirect_uri, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(Error::Validation(format!(
                "Redirect URI must be an http(s) URL with a host, got {}",
                self.redirect_uri
            )));
        }

        Ok(url)
    }
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify OAuth authorization URL (`SPOTIFY_API_AUTH_URL`).
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify OAuth token exchange URL (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}
