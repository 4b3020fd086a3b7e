use serde::{Deserialize, Serialize};

/// A newsletter signup, read-only in the admin panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubscription {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub created_at: String,
}

impl NewsletterSubscription {
    pub fn created_at_display(&self) -> String {
        super::format_created_at(&self.created_at)
    }
}

/// Payload of `POST /api/newsletter`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsletterRequest {
    pub email: String,
}
