//! Full-board replacement shown after a page fetch fails.
//!
//! DESIGN
//! ======
//! A failed board is not patched in place. The fallback takes its slot and
//! the only way forward is `on_retry`, which builds a brand-new board.

#[cfg(test)]
#[path = "network_fallback_test.rs"]
mod network_fallback_test;

use catalog::BoardMode;
use leptos::prelude::*;

#[component]
pub fn NetworkFallback(
    mode: BoardMode,
    reason: Option<String>,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="network-fallback" role="alert">
            <h2 class="network-fallback__title">{fallback_headline(&mode)}</h2>
            <p class="network-fallback__hint">"Check your connection and try again."</p>
            {reason.map(|r| view! { <p class="network-fallback__reason">{r}</p> })}
            <button class="btn btn--primary" on:click=move |_| on_retry.run(())>
                "Try again"
            </button>
        </section>
    }
}

fn fallback_headline(mode: &BoardMode) -> String {
    match mode {
        BoardMode::Popular => "Couldn't load popular movies.".to_owned(),
        BoardMode::Search(term) => format!("Couldn't search for \"{term}\"."),
    }
}
