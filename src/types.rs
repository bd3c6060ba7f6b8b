use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
    pub expires_in: u64,
}

/// Shared between the auth flow and the callback handler.
///
/// The flow stores the `state` it sent to the authorize endpoint; the callback
/// handler fills in the authorization code (or the error Spotify reported).
#[derive(Debug, Clone)]
pub struct CallbackState {
    pub expected_state: String,
    pub code: Option<String>,
    pub error: Option<String>,
}

/// One page of a Web API list endpoint.
///
/// `next` holds the absolute URL of the following page and is `null` on the
/// last one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub owner: Option<PlaylistOwner>,
    #[serde(default)]
    pub tracks: Option<PlaylistTracksRef>,
}

impl Playlist {
    pub fn target(&self) -> PlaylistTarget {
        PlaylistTarget {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub total: u64,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub index: usize,
    pub name: String,
    pub tracks: u64,
    pub owner: String,
}

impl PlaylistTableRow {
    pub fn new(index: usize, playlist: &Playlist) -> Self {
        PlaylistTableRow {
            index,
            name: playlist.name.clone(),
            tracks: playlist.tracks.as_ref().map(|t| t.total).unwrap_or(0),
            owner: playlist
                .owner
                .as_ref()
                .map(|o| o.display_name.clone().unwrap_or_else(|| o.id.clone()))
                .unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
pub struct ContributorTableRow {
    pub contributor: String,
    pub tracks: usize,
}

/// Raw playlist row as returned by `GET /playlists/{id}/tracks`.
///
/// Every field that Spotify may omit or null out is optional here; the
/// conversion into [`TrackEntry`] decides what counts as usable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub added_by: Option<AddedBy>,
    #[serde(default)]
    pub is_local: bool,
    #[serde(default)]
    pub track: Option<ItemTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddedBy {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemTrack {
    #[serde(default)]
    pub uri: Option<String>,
}

/// One playlist row reduced to what the interleaving needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEntry {
    pub track_reference: Option<String>,
    pub contributor_id: Option<String>,
}

impl TrackEntry {
    pub fn new(track_reference: Option<&str>, contributor_id: Option<&str>) -> Self {
        TrackEntry {
            track_reference: track_reference.map(str::to_string),
            contributor_id: contributor_id.map(str::to_string),
        }
    }
}

impl From<PlaylistItem> for TrackEntry {
    fn from(item: PlaylistItem) -> Self {
        // local files cannot be written back through the Web API
        let track_reference = if item.is_local {
            None
        } else {
            item.track
                .and_then(|t| t.uri)
                .filter(|uri| !uri.is_empty())
        };

        TrackEntry {
            track_reference,
            contributor_id: item
                .added_by
                .and_then(|a| a.id)
                .filter(|id| !id.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistTarget {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemsRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub status: u16,
    pub message: String,
}
