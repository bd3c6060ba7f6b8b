use std::ops::Range;

use base64::{Engine, engine::general_purpose::STANDARD};
use rand::{Rng, distr::Alphanumeric};

use crate::{
    error::{Error, Result},
    types::Playlist,
};

/// Maximum number of items Spotify accepts in one replace or append call.
pub const MAX_ITEMS_PER_REQUEST: usize = 100;

/// Random value for the OAuth `state` parameter.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// `Authorization` header value for client authentication at the token
/// endpoint.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Splits `0..len` into consecutive ranges of at most `size` items.
///
/// The first range is the replace call, every following range one append.
pub fn chunk_ranges(len: usize, size: usize) -> Vec<Range<usize>> {
    let size = size.max(1);
    (0..len)
        .step_by(size)
        .map(|start| start..(start + size).min(len))
        .collect()
}

/// Parses a playlist index typed by the operator.
///
/// Accepts a zero-based index smaller than `count`; anything else means no
/// usable selection.
pub fn parse_selection(input: &str, count: usize) -> Result<usize> {
    match input.trim().parse::<usize>() {
        Ok(index) if index < count => Ok(index),
        _ => Err(no_selection()),
    }
}

pub fn no_selection() -> Error {
    Error::Validation("Please select a playlist first.".to_string())
}

/// Picks the playlist chosen by index or by (case-insensitive) name.
///
/// The index wins when both are given.
pub fn select_playlist<'a>(
    playlists: &'a [Playlist],
    index: Option<usize>,
    name: Option<&str>,
) -> Result<&'a Playlist> {
    match (index, name) {
        (Some(index), _) => playlists.get(index).ok_or_else(no_selection),
        (None, Some(name)) => {
            let name = name.trim().to_lowercase();
            playlists
                .iter()
                .find(|p| p.name.to_lowercase() == name)
                .ok_or_else(no_selection)
        }
        (None, None) => Err(no_selection()),
    }
}
