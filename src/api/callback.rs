use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::types::CallbackState;

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<CallbackState>>>,
) -> Html<&'static str> {
    let mut state = shared_state.lock().await;

    if params.get("state") != Some(&state.expected_state) {
        state.error = Some("Authorization response had an unexpected state.".to_string());
        return Html("<h4>Login failed.</h4><p>Unexpected state parameter.</p>");
    }

    if let Some(error) = params.get("error") {
        state.error = Some(format!("Spotify reported: {}", error));
        return Html("<h4>Login failed.</h4>");
    }

    match params.get("code") {
        Some(code) => {
            state.code = Some(code.clone());
            Html("<h2>Authentication successful.</h2><p>Close this browser window.</p>")
        }
        None => Html("<h4>Missing authorization code.</h4>"),
    }
}
