use serde::{Deserialize, Serialize};

/// A showcased agency project, as returned by `GET /api/projects`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    /// Stored filename; resolve with [`crate::config::upload_url`].
    pub image: String,
}
