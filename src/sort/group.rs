use std::collections::HashMap;

use crate::types::TrackEntry;

/// Track URIs bucketed per contributor.
///
/// Buckets keep the order in which contributors first appear in the playlist,
/// and each bucket keeps its tracks in playlist order. That order decides who
/// goes first in every interleaving round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributorGroups {
    groups: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl ContributorGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a track to the contributor's bucket, creating it on first use.
    pub fn push(&mut self, contributor_id: &str, track_reference: String) {
        let position = match self.index.get(contributor_id) {
            Some(&position) => position,
            None => {
                self.groups.push((contributor_id.to_string(), Vec::new()));
                self.index
                    .insert(contributor_id.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        self.groups[position].1.push(track_reference);
    }

    pub fn get(&self, contributor_id: &str) -> Option<&[String]> {
        self.index
            .get(contributor_id)
            .map(|&position| self.groups[position].1.as_slice())
    }

    /// Contributors in first-appearance order.
    pub fn contributors(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(id, tracks)| (id.as_str(), tracks.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn track_count(&self) -> usize {
        self.groups.iter().map(|(_, tracks)| tracks.len()).sum()
    }

    /// Length of the largest bucket, 0 when there are none.
    pub fn longest(&self) -> usize {
        self.groups
            .iter()
            .map(|(_, tracks)| tracks.len())
            .max()
            .unwrap_or(0)
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<S>)> for ContributorGroups {
    fn from_iter<I: IntoIterator<Item = (S, Vec<S>)>>(iter: I) -> Self {
        let mut groups = ContributorGroups::new();
        for (contributor, tracks) in iter {
            let contributor = contributor.into();
            for track in tracks {
                groups.push(&contributor, track.into());
            }
        }
        groups
    }
}

/// Buckets playlist rows by the user who added them.
///
/// Rows without a track URI (removed, unavailable or local tracks) and rows
/// without a contributor are dropped silently.
pub fn group_by_contributor<I>(entries: I) -> ContributorGroups
where
    I: IntoIterator<Item = TrackEntry>,
{
    let mut groups = ContributorGroups::new();

    for entry in entries {
        let (Some(track_reference), Some(contributor_id)) =
            (entry.track_reference, entry.contributor_id)
        else {
            continue;
        };
        groups.push(&contributor_id, track_reference);
    }

    groups
}
