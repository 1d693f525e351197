//! Top-level page container.

use leptos::prelude::*;

use crate::app::AppRouter;
use crate::state::router::PageId;

/// `section.page#<id>`, marked `.active` while it is the current page.
#[component]
pub fn PageSection(page: PageId, children: Children) -> impl IntoView {
    let router = expect_context::<RwSignal<AppRouter>>();

    view! {
        <section id=page.as_str() class="page" class:active=move || router.with(|r| r.is_active(page))>
            <div class="container">{children()}</div>
        </section>
    }
}
