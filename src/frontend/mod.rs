//! Application shell: routing, the admin toggle link, and shared helpers.

pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use pages::{AdminPage, LandingPage};

/// Main application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Webees - Web Development Agency"/>
        <Meta
            name="description"
            content="We create stunning websites and digital experiences that drive results"
        />

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/admin") view=AdminPage/>
                </Routes>
            </main>
            <AdminLink/>
        </Router>
    }
}

/// Floating link toggling between the public site and the admin panel.
#[component]
fn AdminLink() -> impl IntoView {
    let location = use_location();
    let is_admin = Memo::new(move |_| location.pathname.get() == "/admin");

    view! {
        <a class="admin-link-btn" href=move || if is_admin.get() { "/" } else { "/admin" }>
            {move || if is_admin.get() { "Back to Home" } else { "Admin Panel" }}
        </a>
    }
}

/// 404 fallback.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found-code">"404"</h1>
            <p class="not-found-message">"Page not found"</p>
            <a href="/" class="btn-primary">"Return Home"</a>
        </div>
    }
}

/// Blocking notification, matching the backend-agnostic alert discipline:
/// one generic message per action, details go to the console.
pub(crate) fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}
