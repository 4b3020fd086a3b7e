use leptos::prelude::*;

use crate::config;
use crate::models::Client;

/// Testimonial card for one happy client.
#[component]
pub fn ClientCard(client: Client, index: usize) -> impl IntoView {
    let delay = format!("{:.2}s", index as f64 * 0.15);

    view! {
        <div class="client-card" style:animation-delay=delay>
            <div class="client-image-wrapper">
                <img
                    src=config::upload_url(&client.image)
                    alt=client.name.clone()
                    class="client-image"
                />
            </div>
            <p class="client-description">"\""{client.description}"\""</p>
            <h4 class="client-name">{client.name}</h4>
            <p class="client-designation">{client.designation}</p>
        </div>
    }
}
