//! Top navigation bar with mobile menu toggle.

use leptos::prelude::*;

use crate::app::AppRouter;
use crate::components::page_link::follow;
use crate::state::router::PageId;

#[component]
pub fn NavBar(owner_name: String) -> impl IntoView {
    let router = expect_context::<RwSignal<AppRouter>>();

    view! {
        <nav class="navbar">
            <div class="nav-container">
                <a
                    class="nav-logo"
                    href="#home"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        follow(router, PageId::Home.as_str());
                    }
                >
                    {owner_name}
                </a>
                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| router.update(|r| r.toggle_menu())
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class="nav-menu" class:active=move || router.with(|r| r.state().menu_open)>
                    {PageId::ALL
                        .into_iter()
                        .map(|page| {
                            view! {
                                <li>
                                    <a
                                        href=format!("#{}", page.as_str())
                                        class="nav-link"
                                        class:active=move || router.with(|r| r.is_active(page))
                                        data-page=page.as_str()
                                        on:click=move |ev: leptos::ev::MouseEvent| {
                                            ev.prevent_default();
                                            follow(router, page.as_str());
                                        }
                                    >
                                        {page.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}
