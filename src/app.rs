//! Root application component: context providers, window listeners, layout.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::glass_balls::GlassBalls;
use crate::components::nav_bar::NavBar;
use crate::components::project_modal::ProjectModal;
use crate::config::SiteConfig;
use crate::pages::{
    about::AboutPage, contact::ContactPage, experience::ExperiencePage, home::HomePage, projects::ProjectsPage,
    resume::ResumePage,
};
use crate::state::contact::ContactDraft;
use crate::state::modal::ModalState;
use crate::state::router::ViewRouter;
use crate::util::history::BrowserHistory;
use crate::util::scroll_reveal;

/// Router bound to the browser's session history.
pub type AppRouter = ViewRouter<BrowserHistory>;

/// Root application component.
///
/// Provides router, modal, contact draft and config contexts, and installs the
/// window-level `popstate` and Escape-key listeners.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    let router = RwSignal::new(AppRouter::start(BrowserHistory, config.default_page));
    let modal = RwSignal::new(ModalState::default());
    let contact = RwSignal::new(ContactDraft::default());

    provide_context(router);
    provide_context(modal);
    provide_context(contact);
    provide_context(config.clone());

    #[cfg(feature = "csr")]
    {
        use crate::state::router::NavOutcome;

        let _popstate = window_event_listener(leptos::ev::popstate, move |ev| {
            let entry = crate::util::history::entry_from_state(&ev.state());
            let outcome = router
                .try_update(|r| r.restore(entry.as_ref()))
                .unwrap_or(NavOutcome::Ignored);
            if outcome.page().is_some() {
                crate::util::dom::scroll_to_top();
            }
        });
        let _escape = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                modal.update(ModalState::close);
            }
        });
    }

    scroll_reveal::install_after(config.reveal_delay_ms, config.reveal_threshold);

    let owner = config.owner_name.clone();
    let title = move || format!("{} | {}", router.with(|r| r.current().label()), owner);

    view! {
        <Title text=title/>
        <Meta name="description" content="Portfolio: projects, experience, and contact."/>

        <GlassBalls count=config.glass_ball_count/>
        <NavBar owner_name=config.owner_name.clone()/>
        <main class="pages">
            <HomePage owner_name=config.owner_name.clone()/>
            <AboutPage/>
            <ExperiencePage/>
            <ProjectsPage/>
            <ResumePage/>
            <ContactPage/>
        </main>
        <ProjectModal/>
    }
}
