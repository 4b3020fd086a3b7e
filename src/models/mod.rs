//! Wire-format records exchanged with the backend.
//!
//! These are transient in-memory copies; the backend owns the data and is
//! re-queried whenever a view that needs them becomes active.

pub mod client;
pub mod contact;
pub mod newsletter;
pub mod project;
pub mod response;

pub use client::Client;
pub use contact::{ContactRequest, ContactSubmission};
pub use newsletter::{NewsletterRequest, NewsletterSubscription};
pub use project::Project;
pub use response::{ListResponse, StatusResponse};

use chrono::DateTime;

/// Render a backend `createdAt` timestamp for display.
///
/// Falls back to the raw string when it is not valid RFC 3339, so a
/// misbehaving backend degrades to ugly output instead of a blank cell.
pub fn format_created_at(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
