use serde::{Deserialize, Serialize};

/// A submitted consultation request, read-only in the admin panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub city: String,
    #[serde(default)]
    pub created_at: String,
}

impl ContactSubmission {
    pub fn created_at_display(&self) -> String {
        super::format_created_at(&self.created_at)
    }
}

/// Payload of `POST /api/contact`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub city: String,
}
