use crate::{
    error::RemoteServiceError,
    spotify::PlaylistApi,
    utils::{self, MAX_ITEMS_PER_REQUEST},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The ordering was empty; the playlist was left untouched.
    NothingToSort,
    Written { tracks: usize, calls: usize },
}

/// Rewrites the playlist so its content equals `ordering`.
///
/// The first chunk replaces the whole playlist, every further chunk is
/// appended in index order. A failing call stops the write; chunks already
/// sent stay applied.
pub async fn apply_ordering<A: PlaylistApi + ?Sized>(
    api: &A,
    playlist_id: &str,
    ordering: &[String],
) -> Result<WriteOutcome, RemoteServiceError> {
    if ordering.is_empty() {
        return Ok(WriteOutcome::NothingToSort);
    }

    let chunks = utils::chunk_ranges(ordering.len(), MAX_ITEMS_PER_REQUEST);
    for (i, range) in chunks.iter().enumerate() {
        let uris = &ordering[range.clone()];
        if i == 0 {
            api.replace_playlist_items(playlist_id, uris).await?;
        } else {
            api.add_playlist_items(playlist_id, uris).await?;
        }
    }

    Ok(WriteOutcome::Written {
        tracks: ordering.len(),
        calls: chunks.len(),
    })
}
