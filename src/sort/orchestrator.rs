use tokio::sync::mpsc::UnboundedSender;

use crate::{
    error::RemoteServiceError,
    sort::{
        ContributorGroups, WriteOutcome, apply_ordering, fetch_playlist_entries,
        group_by_contributor, interleave,
    },
    spotify::PlaylistApi,
    types::PlaylistTarget,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Final result of one sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    Sorted { target: PlaylistTarget, tracks: usize },
    NothingToSort { target: PlaylistTarget },
    Failed { target: PlaylistTarget, message: String },
}

/// Messages from a running sort to whoever renders its progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortEvent {
    /// Whether a new sort may be started.
    Trigger { enabled: bool },
    Progress { stage: String, severity: Severity },
    Finished(SortOutcome),
}

/// Fetches, groups, interleaves and writes back one playlist.
///
/// Reports a [`SortEvent::Progress`] after every stage and exactly one
/// [`SortEvent::Finished`]. The outcome is returned as well. A closed channel
/// does not stop the sort.
pub async fn run_sort<A: PlaylistApi + ?Sized>(
    api: &A,
    target: &PlaylistTarget,
    events: &UnboundedSender<SortEvent>,
) -> SortOutcome {
    let outcome = match sort_stages(api, target, events).await {
        Ok(WriteOutcome::NothingToSort) => {
            progress(events, "No tracks found to sort.", Severity::Warning);
            SortOutcome::NothingToSort {
                target: target.clone(),
            }
        }
        Ok(WriteOutcome::Written { tracks, .. }) => {
            progress(events, "Success! Playlist sorted.", Severity::Success);
            SortOutcome::Sorted {
                target: target.clone(),
                tracks,
            }
        }
        Err(e) => {
            progress(events, "Error during sorting.", Severity::Error);
            SortOutcome::Failed {
                target: target.clone(),
                message: e.to_string(),
            }
        }
    };

    let _ = events.send(SortEvent::Finished(outcome.clone()));
    outcome
}

async fn sort_stages<A: PlaylistApi + ?Sized>(
    api: &A,
    target: &PlaylistTarget,
    events: &UnboundedSender<SortEvent>,
) -> Result<WriteOutcome, RemoteServiceError> {
    progress(events, "Fetching tracks...", Severity::Info);
    let entries = fetch_playlist_entries(api, &target.id).await?;
    progress(
        events,
        &format!("Processing {} tracks...", entries.len()),
        Severity::Info,
    );

    let groups = group_by_contributor(entries);
    let ordering = interleave(&groups);
    progress(
        events,
        &format!(
            "Interleaved {} tracks from {} contributors.",
            ordering.len(),
            groups.len()
        ),
        Severity::Info,
    );

    if !ordering.is_empty() {
        progress(events, "Updating playlist on Spotify...", Severity::Info);
    }
    apply_ordering(api, &target.id, &ordering).await
}

/// Runs the read-only part of a sort: fetch, group and interleave.
pub async fn preview_sort<A: PlaylistApi + ?Sized>(
    api: &A,
    target: &PlaylistTarget,
) -> Result<(ContributorGroups, Vec<String>), RemoteServiceError> {
    let entries = fetch_playlist_entries(api, &target.id).await?;
    let groups = group_by_contributor(entries);
    let ordering = interleave(&groups);
    Ok((groups, ordering))
}

fn progress(events: &UnboundedSender<SortEvent>, stage: &str, severity: Severity) {
    let _ = events.send(SortEvent::Progress {
        stage: stage.to_string(),
        severity,
    });
}
