use std::{io::Write, sync::Arc};

use tabled::Table;

use crate::{
    cli::{
        connect,
        playlists::{load_playlists, print_playlists},
        spinner,
    },
    config::Credentials,
    error, info,
    sort::{Severity, SortEvent, SortOutcome, SortWorker, preview_sort},
    spotify::PlaylistApi,
    success,
    types::{ContributorTableRow, Playlist, PlaylistTarget},
    utils::{self, MAX_ITEMS_PER_REQUEST},
    warning,
};

pub async fn sort(
    credentials: Credentials,
    index: Option<usize>,
    name: Option<String>,
    dry_run: bool,
) {
    let session = connect(credentials).await;
    let playlists = load_playlists(&session).await;

    let target = match choose_playlist(&playlists, index, name.as_deref()) {
        Ok(playlist) => playlist.target(),
        Err(e) => error!("{}", e),
    };

    if dry_run {
        preview(&session, &target).await;
        return;
    }

    let api: Arc<dyn PlaylistApi> = Arc::new(session);
    let mut worker = SortWorker::new(api);
    let mut events = match worker.submit(target) {
        Ok(rx) => rx,
        Err(e) => error!("{}", e),
    };

    let pb = spinner("Starting...");
    let mut outcome: Option<SortOutcome> = None;

    while let Some(event) = events.recv().await {
        match event {
            SortEvent::Trigger { enabled: false } => pb.suspend(|| info!("Sorting... Please wait")),
            SortEvent::Trigger { enabled: true } => pb.finish_and_clear(),
            SortEvent::Progress { stage, severity } => match severity {
                Severity::Info => pb.set_message(stage),
                Severity::Success => pb.suspend(|| success!("{}", stage)),
                Severity::Warning | Severity::Error => pb.suspend(|| warning!("{}", stage)),
            },
            SortEvent::Finished(result) => outcome = Some(result),
        }
    }
    worker.join().await;

    match outcome {
        Some(SortOutcome::Sorted { target, tracks }) => {
            success!("Playlist '{}' has been sorted! ({} tracks)", target.name, tracks)
        }
        Some(SortOutcome::NothingToSort { target }) => {
            warning!("Playlist '{}' has no tracks to sort.", target.name)
        }
        Some(SortOutcome::Failed { target, message }) => {
            error!("Sorting '{}' failed. {}", target.name, message)
        }
        None => error!("Sort ended without a result."),
    }
}

/// Uses the selection flags, or asks on stdin when none was given.
fn choose_playlist<'a>(
    playlists: &'a [Playlist],
    index: Option<usize>,
    name: Option<&str>,
) -> crate::error::Result<&'a Playlist> {
    if index.is_some() || name.is_some() {
        return utils::select_playlist(playlists, index, name);
    }

    print_playlists(playlists);
    print!("Select a playlist by index: ");
    let _ = std::io::stdout().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return Err(utils::no_selection());
    }
    let index = utils::parse_selection(&input, playlists.len())?;
    utils::select_playlist(playlists, Some(index), None)
}

async fn preview(api: &dyn PlaylistApi, target: &PlaylistTarget) {
    let pb = spinner("Fetching tracks...");
    let result = preview_sort(api, target).await;
    pb.finish_and_clear();

    let (groups, ordering) = match result {
        Ok(preview) => preview,
        Err(e) => error!("Error during sorting. {}", e),
    };

    if ordering.is_empty() {
        warning!("No tracks found to sort.");
        return;
    }

    let rows: Vec<ContributorTableRow> = groups
        .iter()
        .map(|(contributor, tracks)| ContributorTableRow {
            contributor: contributor.to_string(),
            tracks: tracks.len(),
        })
        .collect();
    println!("{}", Table::new(rows));

    info!(
        "'{}': {} tracks from {} contributors in {} rounds.",
        target.name,
        ordering.len(),
        groups.len(),
        groups.longest()
    );
    info!(
        "Writing would take {} requests. Nothing was changed.",
        utils::chunk_ranges(ordering.len(), MAX_ITEMS_PER_REQUEST).len()
    );
}
