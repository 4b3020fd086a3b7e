use webees::models::*;

pub fn seed_project_0() -> Project {
    Project {
        id: "64ab0f3c9d1e2a0001a11001".to_string(),
        name: "Aurora Storefront".to_string(),
        description: "E-commerce revamp with a headless checkout".to_string(),
        image: "aurora.png".to_string(),
    }
}

pub fn seed_project_1() -> Project {
    Project {
        id: "64ab0f3c9d1e2a0001a11002".to_string(),
        name: "Beacon CRM".to_string(),
        description: "Sales dashboard for a logistics firm".to_string(),
        image: "beacon.jpg".to_string(),
    }
}

pub fn seed_client_0() -> Client {
    Client {
        id: "64ab0f3c9d1e2a0001b22001".to_string(),
        name: "Rohan Mehta".to_string(),
        description: "Webees delivered ahead of schedule".to_string(),
        designation: "CEO".to_string(),
        image: "rohan.png".to_string(),
    }
}

pub fn seed_contact_0() -> ContactSubmission {
    ContactSubmission {
        id: "64ab0f3c9d1e2a0001c33001".to_string(),
        full_name: "Priya Sharma".to_string(),
        email: "priya@example.com".to_string(),
        mobile: "9876543210".to_string(),
        city: "Pune".to_string(),
        created_at: "2025-03-14T09:26:53.589Z".to_string(),
    }
}

pub fn seed_newsletter_0() -> NewsletterSubscription {
    NewsletterSubscription {
        id: "64ab0f3c9d1e2a0001d44001".to_string(),
        email: "reader@example.com".to_string(),
        created_at: "2025-03-14T09:26:53.589Z".to_string(),
    }
}
