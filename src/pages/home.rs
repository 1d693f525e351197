//! Hero section.

use leptos::prelude::*;

use crate::components::page_link::PageLink;
use crate::components::page_section::PageSection;
use crate::state::router::PageId;

#[component]
pub fn HomePage(owner_name: String) -> impl IntoView {
    view! {
        <PageSection page=PageId::Home>
            <div class="hero">
                <p class="hero-greeting">"Hello, I'm"</p>
                <h1 class="hero-title">{owner_name}</h1>
                <p class="hero-subtitle">"UI/UX Designer & AI Developer"</p>
                <p class="hero-description">
                    "I design accessible interfaces and build practical machine learning tools, from user research to shipped product."
                </p>
                <div class="hero-buttons">
                    <PageLink page=PageId::Projects class="btn btn-primary">
                        "View Projects"
                    </PageLink>
                    <PageLink page=PageId::Contact class="btn btn-secondary">
                        "Get in Touch"
                    </PageLink>
                </div>
            </div>
        </PageSection>
    }
}
