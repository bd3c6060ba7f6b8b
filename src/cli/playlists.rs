use tabled::Table;

use crate::{
    cli::{connect, spinner},
    config::Credentials,
    error,
    sort::fetch_user_playlists,
    spotify::Session,
    success,
    types::{Playlist, PlaylistTableRow},
};

pub async fn playlists(credentials: Credentials) {
    let session = connect(credentials).await;
    let playlists = load_playlists(&session).await;
    print_playlists(&playlists);
}

pub(crate) async fn load_playlists(session: &Session) -> Vec<Playlist> {
    let pb = spinner("Fetching playlists...");
    let result = fetch_user_playlists(session).await;
    pb.finish_and_clear();

    match result {
        Ok(playlists) => {
            success!("Found {} playlists.", playlists.len());
            playlists
        }
        Err(e) => error!("Error fetching playlists. {}", e),
    }
}

pub(crate) fn print_playlists(playlists: &[Playlist]) {
    let rows: Vec<PlaylistTableRow> = playlists
        .iter()
        .enumerate()
        .map(|(index, playlist)| PlaylistTableRow::new(index, playlist))
        .collect();

    println!("{}", Table::new(rows));
}
