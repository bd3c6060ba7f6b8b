use crate::{
    error::RemoteServiceError,
    spotify::PlaylistApi,
    types::{Playlist, TrackEntry},
};

/// Retrieves every row of a playlist in playlist order.
///
/// Requests pages until one arrives without a `next` cursor. The first failing
/// page aborts the whole fetch.
pub async fn fetch_playlist_entries<A: PlaylistApi + ?Sized>(
    api: &A,
    playlist_id: &str,
) -> Result<Vec<TrackEntry>, RemoteServiceError> {
    let mut entries = Vec::new();
    let mut next: Option<String> = None;

    loop {
        let page = api.playlist_tracks_page(playlist_id, next.as_deref()).await?;
        entries.extend(page.items.into_iter().map(TrackEntry::from));

        next = page.next;
        if next.is_none() {
            break;
        }
    }

    Ok(entries)
}

/// Retrieves all playlists of the authenticated user.
pub async fn fetch_user_playlists<A: PlaylistApi + ?Sized>(
    api: &A,
) -> Result<Vec<Playlist>, RemoteServiceError> {
    let mut playlists = Vec::new();
    let mut next: Option<String> = None;

    loop {
        let page = api.current_user_playlists_page(next.as_deref()).await?;
        playlists.extend(page.items);

        next = page.next;
        if next.is_none() {
            break;
        }
    }

    Ok(playlists)
}
