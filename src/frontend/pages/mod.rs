pub mod admin;
pub mod landing;

pub use admin::AdminPage;
pub use landing::LandingPage;
