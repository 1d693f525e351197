//! Decorative background layer.

use leptos::prelude::*;

use crate::util::glass_balls::fresh_layout;

/// Absolutely positioned, randomly sized balls behind the page content.
#[component]
pub fn GlassBalls(count: usize) -> impl IntoView {
    let balls = fresh_layout(count);

    view! {
        <div class="glass-balls-container" aria-hidden="true">
            {balls
                .into_iter()
                .map(|ball| view! { <div class="glass-ball" style=ball.style()></div> })
                .collect_view()}
        </div>
    }
}
