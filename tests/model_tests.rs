mod common;

#[cfg(test)]
pub mod model_tests {
    use super::common::*;

    use webees::config;
    use webees::models::*;

    #[test]
    fn test_project_deserializes_wire_format() {
        let json = r#"{
            "_id": "64ab0f3c9d1e2a0001a11001",
            "name": "Aurora Storefront",
            "description": "E-commerce revamp with a headless checkout",
            "image": "aurora.png"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project, seed_project_0());
    }

    #[test]
    fn test_client_deserializes_wire_format() {
        let json = r#"{
            "_id": "64ab0f3c9d1e2a0001b22001",
            "name": "Rohan Mehta",
            "description": "Webees delivered ahead of schedule",
            "designation": "CEO",
            "image": "rohan.png"
        }"#;
        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client, seed_client_0());
    }

    #[test]
    fn test_contact_submission_uses_camel_case_fields() {
        let json = r#"{
            "_id": "64ab0f3c9d1e2a0001c33001",
            "fullName": "Priya Sharma",
            "email": "priya@example.com",
            "mobile": "9876543210",
            "city": "Pune",
            "createdAt": "2025-03-14T09:26:53.589Z"
        }"#;
        let contact: ContactSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(contact, seed_contact_0());
    }

    #[test]
    fn test_contact_submission_tolerates_missing_created_at() {
        let json = r#"{
            "_id": "64ab0f3c9d1e2a0001c33002",
            "fullName": "Arjun Rao",
            "email": "arjun@example.com",
            "mobile": "9000000000",
            "city": "Mumbai"
        }"#;
        let contact: ContactSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(contact.created_at, "");
    }

    #[test]
    fn test_newsletter_subscription_deserializes_wire_format() {
        let json = r#"{
            "_id": "64ab0f3c9d1e2a0001d44001",
            "email": "reader@example.com",
            "createdAt": "2025-03-14T09:26:53.589Z"
        }"#;
        let subscription: NewsletterSubscription = serde_json::from_str(json).unwrap();
        assert_eq!(subscription, seed_newsletter_0());
    }

    #[test]
    fn test_contact_request_serializes_camel_case() {
        let request = ContactRequest {
            full_name: "Priya Sharma".to_string(),
            email: "priya@example.com".to_string(),
            mobile: "9876543210".to_string(),
            city: "Pune".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "fullName": "Priya Sharma",
                "email": "priya@example.com",
                "mobile": "9876543210",
                "city": "Pune"
            })
        );
    }

    #[test]
    fn test_newsletter_request_serializes_email_only() {
        let request = NewsletterRequest {
            email: "reader@example.com".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({ "email": "reader@example.com" }));
    }

    #[test]
    fn test_format_created_at_renders_rfc3339() {
        assert_eq!(
            format_created_at("2025-03-14T09:26:53.589Z"),
            "Mar 14, 2025"
        );
    }

    #[test]
    fn test_format_created_at_honors_offsets() {
        assert_eq!(
            format_created_at("2025-12-31T23:00:00+05:30"),
            "Dec 31, 2025"
        );
    }

    #[test]
    fn test_format_created_at_falls_back_to_raw_input() {
        assert_eq!(format_created_at("yesterday"), "yesterday");
        assert_eq!(format_created_at(""), "");
    }

    #[test]
    fn test_created_at_display_uses_shared_formatter() {
        assert_eq!(seed_contact_0().created_at_display(), "Mar 14, 2025");
        assert_eq!(seed_newsletter_0().created_at_display(), "Mar 14, 2025");
    }

    #[test]
    fn test_upload_url_resolves_stored_image() {
        let project = seed_project_0();
        assert!(config::upload_url(&project.image).ends_with("/uploads/aurora.png"));
    }
}
