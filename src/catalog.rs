//! Fixed project table rendered by the gallery and the detail modal.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// One portfolio project. Every field is required text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub details: &'static str,
    /// Short label shown in the card/modal image slot.
    pub placeholder: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Smart Laundry App",
        description: "A comprehensive UI/UX case study for a smart laundry management application with intuitive navigation and seamless booking experience.",
        tech: &["Figma", "UI/UX Design", "User Research", "Wireframing"],
        details: "Complete user research, personas, journey mapping, wireframes, and high-fidelity designs focused on accessibility.",
        placeholder: "UI/UX",
    },
    Project {
        title: "JARVIS - Offline AI Voice Assistant",
        description: "Offline Python voice assistant supporting Thanglish (Tamil + English) commands.",
        tech: &["Python", "Speech Recognition", "NLP", "AI"],
        details: "Performs app control, web search, music, jokes using pyttsx3 and speech_recognition.",
        placeholder: "AI",
    },
    Project {
        title: "PivotPath – AI Career Transition Advisor",
        description: "AI-powered career guidance system for role prediction, salary estimation, and skill gap analysis.",
        tech: &["Python", "Machine Learning", "Streamlit", "Scikit-learn"],
        details: "Features role recommendation, salary prediction, skill gaps, portfolio scoring, and dashboard.",
        placeholder: "CAREER",
    },
    Project {
        title: "Dr. Youth Clinic App Design",
        description: "Professional UI/UX design for healthcare appointment booking.",
        tech: &["Figma", "Healthcare UX", "Prototyping"],
        details: "Designed flows for registration, booking, records, and teleconsultation.",
        placeholder: "DESIGN",
    },
    Project {
        title: "UI/UX Case Study Collection",
        description: "Collection of UI/UX case studies showcasing design thinking.",
        tech: &["Figma", "Adobe XD", "User Research"],
        details: "End-to-end design process documented and published on Behance.",
        placeholder: "PORTFOLIO",
    },
];

/// Look up a project by its gallery position.
#[must_use]
pub fn project(index: usize) -> Option<&'static Project> {
    PROJECTS.get(index)
}
