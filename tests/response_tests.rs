mod common;

#[cfg(test)]
pub mod response_tests {
    use super::common::*;

    use webees::common::ApiError;
    use webees::models::*;

    #[test]
    fn test_envelope_and_bare_array_yield_equal_items() {
        let envelope = r#"{
            "success": true,
            "projects": [
                {
                    "_id": "64ab0f3c9d1e2a0001a11001",
                    "name": "Aurora Storefront",
                    "description": "E-commerce revamp with a headless checkout",
                    "image": "aurora.png"
                },
                {
                    "_id": "64ab0f3c9d1e2a0001a11002",
                    "name": "Beacon CRM",
                    "description": "Sales dashboard for a logistics firm",
                    "image": "beacon.jpg"
                }
            ]
        }"#;
        let bare = r#"[
            {
                "_id": "64ab0f3c9d1e2a0001a11001",
                "name": "Aurora Storefront",
                "description": "E-commerce revamp with a headless checkout",
                "image": "aurora.png"
            },
            {
                "_id": "64ab0f3c9d1e2a0001a11002",
                "name": "Beacon CRM",
                "description": "Sales dashboard for a logistics firm",
                "image": "beacon.jpg"
            }
        ]"#;

        let from_envelope: ListResponse<Project> = serde_json::from_str(envelope).unwrap();
        let from_bare: ListResponse<Project> = serde_json::from_str(bare).unwrap();

        let expected = vec![seed_project_0(), seed_project_1()];
        assert_eq!(from_envelope.into_items().unwrap(), expected);
        assert_eq!(from_bare.into_items().unwrap(), expected);
    }

    #[test]
    fn test_failed_envelope_is_a_rejection() {
        let json = r#"{ "success": false, "projects": [] }"#;
        let response: ListResponse<Project> = serde_json::from_str(json).unwrap();
        assert!(matches!(response.into_items(), Err(ApiError::Rejected)));
    }

    #[test]
    fn test_envelope_accepts_every_list_field_name() {
        let clients: ListResponse<Client> = serde_json::from_str(
            r#"{ "success": true, "clients": [] }"#,
        )
        .unwrap();
        assert_eq!(clients.into_items().unwrap(), vec![]);

        let contacts: ListResponse<ContactSubmission> = serde_json::from_str(
            r#"{ "success": true, "contacts": [] }"#,
        )
        .unwrap();
        assert_eq!(contacts.into_items().unwrap(), vec![]);

        let newsletters: ListResponse<NewsletterSubscription> = serde_json::from_str(
            r#"{ "success": true, "newsletters": [] }"#,
        )
        .unwrap();
        assert_eq!(newsletters.into_items().unwrap(), vec![]);
    }

    #[test]
    fn test_empty_bare_array_parses() {
        let response: ListResponse<Project> = serde_json::from_str("[]").unwrap();
        assert_eq!(response.into_items().unwrap(), vec![]);
    }

    #[test]
    fn test_unrecognized_object_is_an_error() {
        let result: Result<ListResponse<Project>, _> =
            serde_json::from_str(r#"{ "message": "nope" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_status_response_parses_success_flag() {
        let ok: StatusResponse = serde_json::from_str(r#"{ "success": true }"#).unwrap();
        assert!(ok.success);
        let failed: StatusResponse = serde_json::from_str(r#"{ "success": false }"#).unwrap();
        assert!(!failed.success);
    }

    #[test]
    fn test_row_count_matches_item_count() {
        let json = r#"{
            "success": true,
            "contacts": [
                {
                    "_id": "64ab0f3c9d1e2a0001c33001",
                    "fullName": "Priya Sharma",
                    "email": "priya@example.com",
                    "mobile": "9876543210",
                    "city": "Pune",
                    "createdAt": "2025-03-14T09:26:53.589Z"
                }
            ]
        }"#;
        let response: ListResponse<ContactSubmission> = serde_json::from_str(json).unwrap();
        let items = response.into_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0], seed_contact_0());
    }
}
