use crate::sort::ContributorGroups;

/// Flattens the buckets round-robin by position.
///
/// Round `i` takes the `i`-th track of every contributor that still has one,
/// in first-appearance order. Contributors with fewer tracks drop out of later
/// rounds. Every track ends up in the result exactly once.
pub fn interleave(groups: &ContributorGroups) -> Vec<String> {
    let mut ordering = Vec::with_capacity(groups.track_count());

    for round in 0..groups.longest() {
        for (_, tracks) in groups.iter() {
            if let Some(track) = tracks.get(round) {
                ordering.push(track.clone());
            }
        }
    }

    ordering
}
