//! Public marketing landing page.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::frontend::alert;
use crate::frontend::components::{ClientCard, Modal, ProjectCard, SubmitButton, TextInput};
use crate::models::{Client, ContactRequest, NewsletterRequest, Project};

/// Vertical scroll offset past which the header switches to its compact
/// "scrolled" styling.
const SCROLL_THRESHOLD: f64 = 50.0;

/// Landing page: hero with inline contact form, project gallery, client
/// testimonials, newsletter signup, plus the projects and contact modals.
#[component]
pub fn LandingPage() -> impl IntoView {
    let projects = RwSignal::new(Vec::<Project>::new());
    let clients = RwSignal::new(Vec::<Client>::new());

    // Contact form state, shared by the hero form and the contact modal.
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let mobile = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let contact_busy = RwSignal::new(false);

    let newsletter_email = RwSignal::new(String::new());
    let newsletter_busy = RwSignal::new(false);

    let show_projects_modal = RwSignal::new(false);
    let show_contact_modal = RwSignal::new(false);
    let is_scrolled = RwSignal::new(false);

    spawn_local(async move {
        match api::fetch_projects().await {
            Ok(list) => projects.set(list),
            Err(err) => log::error!("Error fetching projects: {err}"),
        }
    });
    spawn_local(async move {
        match api::fetch_clients().await {
            Ok(list) => clients.set(list),
            Err(err) => log::error!("Error fetching clients: {err}"),
        }
    });

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or(0.0);
        is_scrolled.set(offset > SCROLL_THRESHOLD);
    });
    on_cleanup(move || scroll_handle.remove());

    let submit_newsletter = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if newsletter_busy.get_untracked() {
            return;
        }
        newsletter_busy.set(true);
        let request = NewsletterRequest {
            email: newsletter_email.get_untracked(),
        };
        spawn_local(async move {
            match api::subscribe_newsletter(&request).await {
                Ok(()) => {
                    alert("Subscribed successfully!");
                    newsletter_email.set(String::new());
                }
                Err(err) => {
                    log::error!("Error subscribing: {err}");
                    alert("Error subscribing. Please try again.");
                }
            }
            newsletter_busy.set(false);
        });
    };

    let open_projects = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        show_projects_modal.set(true);
    };
    let open_contact = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        show_contact_modal.set(true);
    };
    let scroll_to_learn_more = move |_| {
        if let Some(el) = document().get_element_by_id("learn-more") {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    };

    view! {
        <div class="landing-page">
            <header class=move || {
                if is_scrolled.get() { "header scrolled" } else { "header" }
            }>
                <div class="container">
                    <nav class="navbar">
                        <div class="logo">"Webees"</div>
                        <ul class="nav-links">
                            <li><a href="#home">"Home"</a></li>
                            <li><a href="#projects" on:click=open_projects>"Projects"</a></li>
                            <li><a href="#clients">"Clients"</a></li>
                            <li><a href="#contact" on:click=open_contact>"Contact"</a></li>
                        </ul>
                    </nav>
                </div>
            </header>

            <section id="home" class="hero-section">
                <div class="animated-bg">
                    <div class="blob blob-1"></div>
                    <div class="blob blob-2"></div>
                    <div class="blob blob-3"></div>
                </div>

                <div class="container hero-container">
                    <div class="hero-content">
                        <div class="hero-text">
                            <h1 class="hero-title">
                                "Transform Your Digital Vision Into Reality"
                            </h1>
                            <p class="hero-description">
                                "We create stunning websites and digital experiences \
                                 that drive results and captivate your audience"
                            </p>
                            <div class="hero-buttons">
                                <button
                                    class="btn-primary"
                                    on:click=move |_| show_projects_modal.set(true)
                                >
                                    "View Our Work"
                                </button>
                                <button class="btn-secondary" on:click=scroll_to_learn_more>
                                    "Learn More"
                                </button>
                            </div>
                        </div>

                        <div class="contact-form-wrapper">
                            <h2>"Get a Free Consultation"</h2>
                            <ContactForm
                                form_class="contact-form"
                                full_name=full_name
                                email=email
                                mobile=mobile
                                city=city
                                busy=contact_busy
                                show_modal=show_contact_modal
                            />
                        </div>
                    </div>
                </div>
            </section>

            <section id="projects" class="projects-section">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">"Our Projects"</h2>
                        <p class="section-subtitle">
                            "Explore our showcase of successful projects"
                        </p>
                    </div>
                    <ProjectsGrid projects=projects/>
                </div>
            </section>

            <section id="clients" class="clients-section">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">"Happy Clients"</h2>
                        <p class="section-subtitle">"What our clients say about us"</p>
                    </div>
                    <div class="clients-grid">
                        <For
                            each={move || clients.get().into_iter().enumerate().collect::<Vec<_>>()}
                            key=|(_, client)| client.id.clone()
                            children=|(index, client)| view! {
                                <ClientCard client=client index=index/>
                            }
                        />
                    </div>
                </div>
            </section>

            <section id="learn-more" class="learn-more-section"></section>

            <section class="newsletter-section">
                <div class="container">
                    <div class="newsletter-wrapper">
                        <nav class="footer-nav">
                            <a href="#home">"Home"</a>
                            <a href="#projects" on:click=open_projects>"Projects"</a>
                            <a href="#clients">"Clients"</a>
                            <a href="#contact" on:click=open_contact>"Contact"</a>
                        </nav>

                        <div class="newsletter-form-wrapper">
                            <h3>"Subscribe Us"</h3>
                            <form class="newsletter-form" on:submit=submit_newsletter>
                                <TextInput
                                    name="newsletterEmail"
                                    input_type="email"
                                    placeholder="Enter Email Address"
                                    value=newsletter_email
                                />
                                <SubmitButton
                                    label="Subscribe"
                                    busy_label="Subscribing..."
                                    busy=newsletter_busy
                                    class="subscribe-btn"
                                />
                            </form>
                        </div>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="container">
                    <p>"© 2025 Webees. All rights reserved."</p>
                </div>
            </footer>

            <Modal
                open=show_projects_modal
                overlay_class="projects-modal"
                content_class="projects-modal-inner"
                close_class="modal-close-btn"
            >
                <div class="projects-modal-header">
                    <h2>"Our Projects"</h2>
                </div>
                <div class="projects-modal-body">
                    <ProjectsGrid projects=projects/>
                </div>
            </Modal>

            <Modal
                open=show_contact_modal
                overlay_class="popup-overlay"
                content_class="popup-content"
            >
                <h2>"Get a Free Consultation"</h2>
                <ContactForm
                    form_class="contact-form-modal"
                    full_name=full_name
                    email=email
                    mobile=mobile
                    city=city
                    busy=contact_busy
                    show_modal=show_contact_modal
                />
            </Modal>
        </div>
    }
}

/// Keyed project grid, shared by the showcase section and the modal.
#[component]
fn ProjectsGrid(projects: RwSignal<Vec<Project>>) -> impl IntoView {
    view! {
        <div class="projects-grid">
            <For
                each={move || projects.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(_, project)| project.id.clone()
                children=|(index, project)| view! {
                    <ProjectCard project=project index=index/>
                }
            />
        </div>
    }
}

/// Consultation form. Submitting clears the fields and closes the contact
/// modal on success; the busy flag keeps rapid re-submits from overlapping.
#[component]
fn ContactForm(
    #[prop(into)] form_class: String,
    full_name: RwSignal<String>,
    email: RwSignal<String>,
    mobile: RwSignal<String>,
    city: RwSignal<String>,
    busy: RwSignal<bool>,
    show_modal: RwSignal<bool>,
) -> impl IntoView {
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let request = ContactRequest {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            mobile: mobile.get_untracked(),
            city: city.get_untracked(),
        };
        spawn_local(async move {
            match api::submit_contact(&request).await {
                Ok(()) => {
                    alert("Contact form submitted successfully!");
                    full_name.set(String::new());
                    email.set(String::new());
                    mobile.set(String::new());
                    city.set(String::new());
                    show_modal.set(false);
                }
                Err(err) => {
                    log::error!("Error submitting contact form: {err}");
                    alert("Error submitting form. Please try again.");
                }
            }
            busy.set(false);
        });
    };

    view! {
        <form class=form_class on:submit=on_submit>
            <TextInput name="fullName" placeholder="Full Name" value=full_name/>
            <TextInput
                name="email"
                input_type="email"
                placeholder="Enter Email Address"
                value=email
            />
            <TextInput name="mobile" input_type="tel" placeholder="Mobile Number" value=mobile/>
            <TextInput name="city" placeholder="Area, City" value=city/>
            <SubmitButton label="Get Quick Quote" busy_label="Sending..." busy=busy/>
        </form>
    }
}
