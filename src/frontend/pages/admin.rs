//! Admin panel: content creation forms and submission lists.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement};

use crate::api;
use crate::frontend::alert;
use crate::frontend::components::{SubmitButton, TextInput};
use crate::models::{ContactSubmission, NewsletterSubscription};

/// Panels of the admin view. `Projects` is the initial tab; transitions
/// happen only through the sidebar buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Projects,
    Clients,
    Contacts,
    Newsletters,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [
        AdminTab::Projects,
        AdminTab::Clients,
        AdminTab::Contacts,
        AdminTab::Newsletters,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Projects => "Add Project",
            AdminTab::Clients => "Add Client",
            AdminTab::Contacts => "Contact Forms",
            AdminTab::Newsletters => "Newsletters",
        }
    }
}

/// Admin panel page. Form state lives here so switching tabs does not lose
/// half-filled forms; the list tabs refetch every time they become active.
#[component]
pub fn AdminPage() -> impl IntoView {
    let active_tab = RwSignal::new(AdminTab::default());

    let project_name = RwSignal::new(String::new());
    let project_description = RwSignal::new(String::new());
    let project_image = RwSignal::new_local(None::<File>);
    let project_busy = RwSignal::new(false);
    let project_image_input: NodeRef<html::Input> = NodeRef::new();

    let client_name = RwSignal::new(String::new());
    let client_description = RwSignal::new(String::new());
    let client_designation = RwSignal::new(String::new());
    let client_image = RwSignal::new_local(None::<File>);
    let client_busy = RwSignal::new(false);
    let client_image_input: NodeRef<html::Input> = NodeRef::new();

    let contacts = RwSignal::new(Vec::<ContactSubmission>::new());
    let newsletters = RwSignal::new(Vec::<NewsletterSubscription>::new());

    // Refetch whenever one of the list tabs becomes active, visited before
    // or not.
    Effect::new(move |_| match active_tab.get() {
        AdminTab::Contacts => {
            spawn_local(async move {
                match api::fetch_contacts().await {
                    Ok(list) => contacts.set(list),
                    Err(err) => {
                        log::error!("Error fetching contacts: {err}");
                        alert("Error fetching contacts. Check console for details.");
                    }
                }
            });
        }
        AdminTab::Newsletters => {
            spawn_local(async move {
                match api::fetch_newsletters().await {
                    Ok(list) => newsletters.set(list),
                    Err(err) => {
                        log::error!("Error fetching newsletters: {err}");
                        alert("Error fetching newsletters. Check console for details.");
                    }
                }
            });
        }
        AdminTab::Projects | AdminTab::Clients => {}
    });

    view! {
        <div class="admin-panel">
            <div class="admin-sidebar">
                <h2>"Admin Panel"</h2>
                <nav class="admin-nav">
                    {AdminTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class=move || {
                                        if active_tab.get() == tab { "active" } else { "" }
                                    }
                                    on:click=move |_| active_tab.set(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>

            <div class="admin-content">
                <Show when=move || active_tab.get() == AdminTab::Projects>
                    <ProjectForm
                        name=project_name
                        description=project_description
                        image=project_image
                        busy=project_busy
                        image_input=project_image_input
                    />
                </Show>
                <Show when=move || active_tab.get() == AdminTab::Clients>
                    <ClientForm
                        name=client_name
                        description=client_description
                        designation=client_designation
                        image=client_image
                        busy=client_busy
                        image_input=client_image_input
                    />
                </Show>
                <Show when=move || active_tab.get() == AdminTab::Contacts>
                    <ContactsPanel contacts=contacts/>
                </Show>
                <Show when=move || active_tab.get() == AdminTab::Newsletters>
                    <NewslettersPanel newsletters=newsletters/>
                </Show>
            </div>
        </div>
    }
}

fn selected_file(ev: &ev::Event) -> Option<File> {
    event_target::<HtmlInputElement>(ev)
        .files()
        .and_then(|files| files.get(0))
}

/// Project creation form: name, description, and a required image that is
/// uploaded as a multipart part.
#[component]
fn ProjectForm(
    name: RwSignal<String>,
    description: RwSignal<String>,
    image: RwSignal<Option<File>, LocalStorage>,
    busy: RwSignal<bool>,
    image_input: NodeRef<html::Input>,
) -> impl IntoView {
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        // The input is `required`, so this only trips if submission is
        // forced programmatically.
        let Some(file) = image.get_untracked() else {
            return;
        };
        busy.set(true);
        let name_value = name.get_untracked();
        let description_value = description.get_untracked();
        spawn_local(async move {
            match api::create_project(&name_value, &description_value, &file).await {
                Ok(()) => {
                    alert("Project added successfully!");
                    name.set(String::new());
                    description.set(String::new());
                    image.set(None);
                    if let Some(input) = image_input.get_untracked() {
                        input.set_value("");
                    }
                }
                Err(err) => {
                    log::error!("Error adding project: {err}");
                    alert("Error adding project. Please try again.");
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="admin-section">
            <h2>"Add New Project"</h2>
            <form class="admin-form" on:submit=on_submit>
                <TextInput label="Project Name" name="name" value=name/>
                <div class="form-group">
                    <label for="description">"Project Description"</label>
                    <textarea
                        id="description"
                        name="description"
                        rows=4
                        required=true
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-group">
                    <label for="projectImageInput">"Project Image"</label>
                    <input
                        type="file"
                        id="projectImageInput"
                        name="image"
                        accept="image/*"
                        required=true
                        node_ref=image_input
                        on:change=move |ev| image.set(selected_file(&ev))
                    />
                </div>
                <SubmitButton label="Add Project" busy_label="Uploading..." busy=busy/>
            </form>
        </div>
    }
}

/// Client testimonial creation form; like the project form plus a
/// designation field.
#[component]
fn ClientForm(
    name: RwSignal<String>,
    description: RwSignal<String>,
    designation: RwSignal<String>,
    image: RwSignal<Option<File>, LocalStorage>,
    busy: RwSignal<bool>,
    image_input: NodeRef<html::Input>,
) -> impl IntoView {
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(file) = image.get_untracked() else {
            return;
        };
        busy.set(true);
        let name_value = name.get_untracked();
        let description_value = description.get_untracked();
        let designation_value = designation.get_untracked();
        spawn_local(async move {
            match api::create_client(
                &name_value,
                &description_value,
                &designation_value,
                &file,
            )
            .await
            {
                Ok(()) => {
                    alert("Client added successfully!");
                    name.set(String::new());
                    description.set(String::new());
                    designation.set(String::new());
                    image.set(None);
                    if let Some(input) = image_input.get_untracked() {
                        input.set_value("");
                    }
                }
                Err(err) => {
                    log::error!("Error adding client: {err}");
                    alert("Error adding client. Please try again.");
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="admin-section">
            <h2>"Add New Client"</h2>
            <form class="admin-form" on:submit=on_submit>
                <TextInput label="Client Name" name="clientName" value=name/>
                <div class="form-group">
                    <label for="clientDescription">"Client Description"</label>
                    <textarea
                        id="clientDescription"
                        name="description"
                        rows=4
                        required=true
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <TextInput
                    label="Client Designation"
                    name="designation"
                    placeholder="e.g. CEO, Web Developer, Designer"
                    value=designation
                />
                <div class="form-group">
                    <label for="clientImageInput">"Client Image"</label>
                    <input
                        type="file"
                        id="clientImageInput"
                        name="image"
                        accept="image/*"
                        required=true
                        node_ref=image_input
                        on:change=move |ev| image.set(selected_file(&ev))
                    />
                </div>
                <SubmitButton label="Add Client" busy_label="Uploading..." busy=busy/>
            </form>
        </div>
    }
}

/// Read-only table of contact-form submissions.
#[component]
fn ContactsPanel(contacts: RwSignal<Vec<ContactSubmission>>) -> impl IntoView {
    view! {
        <div class="admin-section">
            <h2>"Contact Form Submissions"</h2>
            <div class="table-container">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Full Name"</th>
                            <th>"Email"</th>
                            <th>"Mobile"</th>
                            <th>"City"</th>
                            <th>"Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || contacts.get()
                            key=|contact| contact.id.clone()
                            children=|contact| {
                                let date = contact.created_at_display();
                                view! {
                                    <tr>
                                        <td>{contact.full_name}</td>
                                        <td>{contact.email}</td>
                                        <td>{contact.mobile}</td>
                                        <td>{contact.city}</td>
                                        <td>{date}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || contacts.with(Vec::is_empty)>
                    <p class="no-data">"No contact form submissions yet."</p>
                </Show>
            </div>
        </div>
    }
}

/// Read-only table of newsletter subscriptions.
#[component]
fn NewslettersPanel(newsletters: RwSignal<Vec<NewsletterSubscription>>) -> impl IntoView {
    view! {
        <div class="admin-section">
            <h2>"Newsletter Subscriptions"</h2>
            <div class="table-container">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Email Address"</th>
                            <th>"Subscription Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || newsletters.get()
                            key=|subscription| subscription.id.clone()
                            children=|subscription| {
                                let date = subscription.created_at_display();
                                view! {
                                    <tr>
                                        <td>{subscription.email}</td>
                                        <td>{date}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || newsletters.with(Vec::is_empty)>
                    <p class="no-data">"No newsletter subscriptions yet."</p>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_tab_is_projects() {
        assert_eq!(AdminTab::default(), AdminTab::Projects);
    }

    #[test]
    fn sidebar_order_is_fixed() {
        assert_eq!(
            AdminTab::ALL,
            [
                AdminTab::Projects,
                AdminTab::Clients,
                AdminTab::Contacts,
                AdminTab::Newsletters,
            ]
        );
    }

    #[test]
    fn tab_labels() {
        assert_eq!(AdminTab::Projects.label(), "Add Project");
        assert_eq!(AdminTab::Clients.label(), "Add Client");
        assert_eq!(AdminTab::Contacts.label(), "Contact Forms");
        assert_eq!(AdminTab::Newsletters.label(), "Newsletters");
    }
}
