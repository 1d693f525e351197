//! Project gallery.

use leptos::prelude::*;

use crate::catalog::PROJECTS;
use crate::components::page_section::PageSection;
use crate::components::project_card::ProjectCard;
use crate::state::router::PageId;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <PageSection page=PageId::Projects>
            <h2 class="section-title">"Projects"</h2>
            <div class="projects-grid">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard index=index project=project/> })
                    .collect_view()}
            </div>
        </PageSection>
    }
}
