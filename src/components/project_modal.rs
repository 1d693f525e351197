//! Shared project detail dialog.

use leptos::prelude::*;

use crate::catalog::Project;
use crate::state::modal::ModalState;
use crate::util::dom::set_scroll_locked;

/// `#projectModal`: filled from the open catalog record, scroll-locked while
/// visible. Closes on the close button or a backdrop click; the Escape key is
/// handled at the window level in `App`.
#[component]
pub fn ProjectModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();

    Effect::new(move || set_scroll_locked(modal.with(ModalState::is_open)));

    let close = move || modal.update(ModalState::close);
    let field = move |pick: fn(&Project) -> &'static str| modal.with(|m| m.project().map(pick).unwrap_or_default());
    let tags = move || {
        modal
            .with(|m| m.project().map(|p| p.tech).unwrap_or_default())
            .iter()
            .map(|tag| view! { <span class="tag">{*tag}</span> })
            .collect_view()
    };

    view! {
        <div id="projectModal" class="modal" class:active=move || modal.with(ModalState::is_open) on:click=move |_| close()>
            <div class="modal-content" role="dialog" aria-modal="true" on:click=move |ev| ev.stop_propagation()>
                <button class="modal-close" aria-label="Close" on:click=move |_| close()>
                    "×"
                </button>
                <div class="modal-image">
                    <span class="modal-placeholder">{move || field(|p| p.placeholder)}</span>
                </div>
                <h2 class="modal-title">{move || field(|p| p.title)}</h2>
                <p class="modal-description">{move || field(|p| p.description)}</p>
                <div class="modal-tech">{tags}</div>
                <p class="modal-details">{move || field(|p| p.details)}</p>
            </div>
        </div>
    }
}
