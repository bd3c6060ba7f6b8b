//! # API Module
//!
//! HTTP handlers for the temporary server that receives the OAuth redirect.
//!
//! - [`callback`] - records the authorization code (or the error Spotify
//!   reported) so the waiting auth flow can continue.
//!
//! The handlers are mounted by [`crate::server::start_callback_server`].

mod callback;

pub use callback::callback;
