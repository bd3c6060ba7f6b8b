//! # Sort Pipeline
//!
//! Reorders one playlist so that contributors take turns:
//!
//! ```text
//! fetch (paginated GET) → group by contributor → interleave round-robin → write back
//! ```
//!
//! - [`fetch`] - every row of a playlist, following `next` page cursors
//! - [`group`] - buckets track URIs per contributor in first-appearance order
//! - [`interleave`] - round-robin by position across the buckets
//! - [`write`] - one replace call followed by ordered append calls, ≤100 URIs each
//! - [`orchestrator`] - runs the four steps and reports [`SortEvent`]s
//! - [`worker`] - runs at most one orchestrator at a time on a background task
//!
//! Nothing is retried and nothing is rolled back: a failed write leaves the
//! playlist as the last successful chunk left it, and running the sort again
//! starts over from the playlist's current content.

pub mod fetch;
pub mod group;
pub mod interleave;
pub mod orchestrator;
pub mod worker;
pub mod write;

pub use fetch::{fetch_playlist_entries, fetch_user_playlists};
pub use group::{ContributorGroups, group_by_contributor};
pub use interleave::interleave;
pub use orchestrator::{Severity, SortEvent, SortOutcome, preview_sort, run_sort};
pub use worker::SortWorker;
pub use write::{WriteOutcome, apply_ordering};
