//! Experience/education timeline.

use leptos::prelude::*;

use crate::components::page_section::PageSection;
use crate::state::router::PageId;

#[derive(Clone, Copy)]
struct TimelineItem {
    period: &'static str,
    role: &'static str,
    place: &'static str,
    summary: &'static str,
}

const TIMELINE: &[TimelineItem] = &[
    TimelineItem {
        period: "Present",
        role: "UI/UX Designer (Freelance)",
        place: "Remote",
        summary: "Case studies and app designs for healthcare and service startups.",
    },
    TimelineItem {
        period: "Projects",
        role: "AI Developer",
        place: "Independent",
        summary: "Career guidance and voice assistant tools in Python.",
    },
    TimelineItem {
        period: "Education",
        role: "B.E. Computer Science",
        place: "University",
        summary: "Human-computer interaction, machine learning, and software engineering.",
    },
];

#[component]
pub fn ExperiencePage() -> impl IntoView {
    view! {
        <PageSection page=PageId::Experience>
            <h2 class="section-title">"Experience"</h2>
            <div class="timeline">
                {TIMELINE
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="timeline-item">
                                <span class="timeline-period">{item.period}</span>
                                <div class="timeline-content glass-card">
                                    <h3>{item.role}</h3>
                                    <p class="timeline-place">{item.place}</p>
                                    <p>{item.summary}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}
