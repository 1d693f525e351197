//! Resume card with the download placeholder.

use leptos::prelude::*;

use crate::components::page_section::PageSection;
use crate::state::router::PageId;
use crate::util::notice::resume_requested;

#[component]
pub fn ResumePage() -> impl IntoView {
    view! {
        <PageSection page=PageId::Resume>
            <h2 class="section-title">"Resume"</h2>
            <div class="resume-card glass-card">
                <h3>"Curriculum Vitae"</h3>
                <p>"Design and development experience, education, and skills in one page."</p>
                <button class="btn btn-primary" on:click=move |_| resume_requested()>
                    "Download Resume"
                </button>
            </div>
        </PageSection>
    }
}
