//! Reusable UI components.

mod button;
mod client_card;
mod input;
mod modal;
mod project_card;

pub use button::SubmitButton;
pub use client_card::ClientCard;
pub use input::TextInput;
pub use modal::Modal;
pub use project_card::ProjectCard;
