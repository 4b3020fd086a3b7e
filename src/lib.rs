//! Webees marketing site frontend.
//!
//! Client-side rendered Leptos application serving the agency's public
//! landing page and its companion admin panel. All persistence lives in an
//! external REST backend; this crate only renders, fetches, and submits.

pub mod api;
pub mod common;
pub mod config;
pub mod frontend;
pub mod models;
