//! About section: summary and skill groups.

use leptos::prelude::*;

use crate::components::page_section::PageSection;
use crate::state::router::PageId;

const SKILL_GROUPS: &[(&str, &[&str])] = &[
    ("Design", &["Figma", "Adobe XD", "Wireframing", "Prototyping", "User Research"]),
    ("Development", &["Python", "Streamlit", "HTML", "CSS", "JavaScript"]),
    ("AI / ML", &["Scikit-learn", "NLP", "Speech Recognition"]),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageSection page=PageId::About>
            <h2 class="section-title">"About Me"</h2>
            <div class="glass-card about-summary">
                <p>
                    "I work where design meets engineering: research-driven interfaces on one side, small AI systems that solve everyday problems on the other."
                </p>
            </div>
            <div class="skills-grid">
                {SKILL_GROUPS
                    .iter()
                    .map(|(group, skills)| {
                        view! {
                            <div class="glass-card skill-group">
                                <h3>{*group}</h3>
                                <div class="skill-tags">
                                    {skills.iter().map(|s| view! { <span class="tag">{*s}</span> }).collect_view()}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}
