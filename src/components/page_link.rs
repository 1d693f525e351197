//! Links and buttons that switch pages.

use leptos::prelude::*;

use crate::app::AppRouter;
use crate::state::router::{NavOutcome, PageId};
use crate::util::dom::scroll_to_top;

/// Navigate to `page_id`, push a history entry, and scroll to top.
/// Unknown ids change nothing.
pub fn follow(router: RwSignal<AppRouter>, page_id: &str) -> NavOutcome {
    let outcome = router.try_update(|r| r.navigate(page_id)).unwrap_or(NavOutcome::Ignored);
    if outcome.page().is_some() {
        scroll_to_top();
    }
    outcome
}

/// In-page button carrying a `data-page` target (e.g. hero call-to-action).
#[component]
pub fn PageLink(page: PageId, #[prop(into)] class: String, children: Children) -> impl IntoView {
    let router = expect_context::<RwSignal<AppRouter>>();

    view! {
        <a
            href=format!("#{}", page.as_str())
            class=class
            data-page=page.as_str()
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                follow(router, page.as_str());
            }
        >
            {children()}
        </a>
    }
}
