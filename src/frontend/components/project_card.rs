use leptos::prelude::*;

use crate::config;
use crate::models::Project;

/// Gallery card for one showcased project.
#[component]
pub fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let delay = format!("{:.1}s", index as f64 * 0.1);

    view! {
        <div class="project-card" style:animation-delay=delay>
            <div class="project-image-wrapper">
                <img
                    src=config::upload_url(&project.image)
                    alt=project.name.clone()
                    class="project-image"
                />
                <div class="project-overlay"></div>
            </div>
            <div class="project-content">
                <h3 class="project-name">{project.name}</h3>
                <p class="project-description">{project.description}</p>
                <button class="read-more-btn">"READ MORE"</button>
            </div>
        </div>
    }
}
