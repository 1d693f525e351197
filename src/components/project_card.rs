//! Gallery card for one catalog project.

use leptos::prelude::*;

use crate::catalog::Project;
use crate::state::modal::ModalState;

/// Clicking the card opens the detail modal on `index`.
#[component]
pub fn ProjectCard(index: usize, project: &'static Project) -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();

    view! {
        <article class="project-card glass-card" on:click=move |_| modal.update(|m| {
            m.open(index);
        })>
            <div class="project-image">
                <span class="project-placeholder">{project.placeholder}</span>
            </div>
            <div class="project-body">
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{project.description}</p>
                <div class="project-tech">
                    {project.tech.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view()}
                </div>
            </div>
        </article>
    }
}
