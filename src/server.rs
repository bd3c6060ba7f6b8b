use axum::{Extension, Router, routing::get};
use reqwest::Url;
use std::sync::Arc;
use tokio::{sync::Mutex, task::JoinHandle};

use crate::{
    api,
    error::{Error, Result},
    types::CallbackState,
    warning,
};

/// Binds a server for the OAuth redirect and serves it on a background task.
///
/// Listens on the redirect URL's host and port and routes its path to
/// [`api::callback`]. The returned handle is aborted by the caller once the
/// flow is over.
pub async fn start_callback_server(
    redirect_url: &Url,
    state: Arc<Mutex<CallbackState>>,
) -> Result<JoinHandle<()>> {
    let host = redirect_url
        .host_str()
        .ok_or_else(|| Error::Validation("Redirect URI has no host".to_string()))?
        .to_string();
    let port = redirect_url.port_or_known_default().unwrap_or(80);
    let path = match redirect_url.path() {
        "" => "/",
        p => p,
    };

    let app = Router::new().route(path, get(api::callback).layer(Extension(state)));

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .map_err(|e| {
            Error::Auth(format!(
                "Cannot listen on {}:{} for the redirect: {}",
                host, port, e
            ))
        })?;

    Ok(tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            warning!("Callback server stopped: {}", e);
        }
    }))
}
