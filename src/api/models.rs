use serde::{Deserialize, Serialize};

/// A song record as returned by the search backend. Display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub album: String,
    #[serde(default)]
    pub image: Option<String>,
    pub spotify_url: String,
}

/// Body of a non-2xx response. Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
