use crate::{config::Credentials, error, info, spotify, success};

/// Authenticates with the given credentials or exits with an error message.
pub async fn connect(credentials: Credentials) -> spotify::Session {
    let credentials = match credentials.validate() {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    info!("Connecting to Spotify...");
    match spotify::auth::authenticate(&credentials).await {
        Ok(session) => {
            success!("Connected!");
            session
        }
        Err(e) => error!("Connection failed. {}", e),
    }
}
