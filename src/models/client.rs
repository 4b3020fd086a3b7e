use serde::{Deserialize, Serialize};

/// A client testimonial, as returned by `GET /api/clients`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    /// Job title shown under the name, e.g. "CEO" or "Web Developer".
    pub designation: String,
    pub image: String,
}
