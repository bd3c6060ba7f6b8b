use std::{sync::Arc, time::Duration};

use reqwest::{Client, Url, header::AUTHORIZATION};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config::{self, Credentials},
    error::{Error, Result},
    info,
    server::start_callback_server,
    spotify::Session,
    types::{CallbackState, Token},
    utils, warning,
};

/// How long the operator has to approve access in the browser.
const AUTH_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs the OAuth 2.0 authorization code flow and returns an authenticated
/// [`Session`].
///
/// 1. Starts a local callback server on the redirect URI's host, port and path
/// 2. Opens the authorize URL (with a random `state`) in the default browser
/// 3. Waits for the redirect carrying the authorization code
/// 4. Exchanges the code for an access token, authenticating with the client
///    secret
///
/// The callback server is stopped before returning.
///
/// # Errors
///
/// - [`Error::Validation`] if the credentials are incomplete
/// - [`Error::Auth`] if the server cannot bind, the operator denies access,
///   the flow times out or the token exchange fails
pub async fn authenticate(credentials: &Credentials) -> Result<Session> {
    let credentials = credentials.clone().validate()?;
    let redirect_url = credentials.redirect_url()?;

    let expected_state = utils::generate_state();
    let shared_state = Arc::new(Mutex::new(CallbackState {
        expected_state: expected_state.clone(),
        code: None,
        error: None,
    }));

    let server = start_callback_server(&redirect_url, Arc::clone(&shared_state)).await?;

    let auth_url = authorize_url(&credentials, &expected_state)?;
    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    } else {
        info!("Waiting for authorization in the browser...");
    }

    let code = wait_for_code(shared_state, AUTH_TIMEOUT).await;
    server.abort();

    let token = exchange_code(&credentials, &code?).await?;
    Ok(Session::new(token))
}

/// Builds the authorize URL for the given credentials and `state`.
pub fn authorize_url(credentials: &Credentials, state: &str) -> Result<Url> {
    Url::parse_with_params(
        &config::spotify_apiauth_url(),
        &[
            ("client_id", credentials.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", credentials.redirect_uri.as_str()),
            ("scope", config::SPOTIFY_SCOPE),
            ("state", state),
        ],
    )
    .map_err(|e| Error::Config(format!("Invalid authorization URL: {}", e)))
}

/// Polls the shared state until the callback handler stored a code or an
/// error, or until `max_wait` elapsed.
pub async fn wait_for_code(
    shared_state: Arc<Mutex<CallbackState>>,
    max_wait: Duration,
) -> Result<String> {
    use std::time::Instant;

    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(error) = &lock.error {
            return Err(Error::Auth(error.clone()));
        }
        if let Some(code) = &lock.code {
            return Ok(code.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    Err(Error::Auth(
        "Authorization was not completed in time.".to_string(),
    ))
}

/// Exchanges an authorization code for an access token.
async fn exchange_code(credentials: &Credentials, code: &str) -> Result<Token> {
    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .header(
            AUTHORIZATION,
            utils::basic_auth_header(&credentials.client_id, &credentials.client_secret),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", credentials.redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(|e| Error::Auth(e.to_string()))?;

    let status = res.status();
    let json: Value = res.json().await.map_err(|e| Error::Auth(e.to_string()))?;

    if !status.is_success() {
        let reason = json["error_description"]
            .as_str()
            .or_else(|| json["error"].as_str())
            .unwrap_or("token exchange rejected");
        return Err(Error::Auth(format!("{} ({})", reason, status)));
    }

    serde_json::from_value::<Token>(json).map_err(|e| Error::Auth(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            client_id: "client".to_string(),
            client_secret: "secret".to_string(),
            redirect_uri: "http://localhost:8888/callback".to_string(),
        }
    }

    fn state(code: Option<&str>, error: Option<&str>) -> Arc<Mutex<CallbackState>> {
        Arc::new(Mutex::new(CallbackState {
            expected_state: "abc".to_string(),
            code: code.map(str::to_string),
            error: error.map(str::to_string),
        }))
    }

    #[test]
    fn authorize_url_carries_scope_state_and_redirect() {
        let url = authorize_url(&credentials(), "xyz").unwrap();
        let params: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert!(params.contains(&("client_id".to_string(), "client".to_string())));
        assert!(params.contains(&("response_type".to_string(), "code".to_string())));
        assert!(params.contains(&("state".to_string(), "xyz".to_string())));
        assert!(params.contains(&(
            "redirect_uri".to_string(),
            "http://localhost:8888/callback".to_string()
        )));
        assert!(params.contains(&("scope".to_string(), config::SPOTIFY_SCOPE.to_string())));
        assert!(!url.as_str().contains("secret"));
    }

    #[tokio::test]
    async fn wait_for_code_returns_stored_code() {
        let code = wait_for_code(state(Some("the-code"), None), Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(code, "the-code");
    }

    #[tokio::test]
    async fn wait_for_code_surfaces_denied_access() {
        let err = wait_for_code(state(None, Some("access_denied")), Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Auth(msg) if msg == "access_denied"));
    }

    #[tokio::test]
    async fn wait_for_code_times_out() {
        let err = wait_for_code(state(None, None), Duration::from_millis(10))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
    }
}
