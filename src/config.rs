//! Backend endpoint configuration.
//!
//! The API base URL is baked in at compile time via the `WEBEES_API_BASE`
//! environment variable, falling back to the local development backend.

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Base URL of the backend service, without a trailing slash.
pub fn api_base() -> &'static str {
    option_env!("WEBEES_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// URL of an API endpoint, e.g. `api_url("projects")`.
pub fn api_url(path: &str) -> String {
    join(api_base(), "api", path)
}

/// URL of an image stored by the backend under `/uploads`.
pub fn upload_url(filename: &str) -> String {
    join(api_base(), "uploads", filename)
}

fn join(base: &str, segment: &str, rest: &str) -> String {
    format!(
        "{}/{}/{}",
        base.trim_end_matches('/'),
        segment,
        rest.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_handles_stray_slashes() {
        assert_eq!(
            join("http://localhost:5000/", "api", "/projects"),
            "http://localhost:5000/api/projects"
        );
        assert_eq!(
            join("http://localhost:5000", "uploads", "logo.png"),
            "http://localhost:5000/uploads/logo.png"
        );
    }

    #[test]
    fn api_url_targets_api_prefix() {
        assert!(api_url("contact").ends_with("/api/contact"));
    }

    #[test]
    fn upload_url_targets_uploads_prefix() {
        assert!(upload_url("x.png").ends_with("/uploads/x.png"));
    }
}
