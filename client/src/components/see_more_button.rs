//! Manual "see more" control for a poster board.
//!
//! Hidden once the board is terminal and disabled while a cycle is in
//! flight; both flags come from the board state.

use leptos::prelude::*;

#[component]
pub fn SeeMoreButton(visible: Signal<bool>, enabled: Signal<bool>, on_click: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <button
                class="btn btn--primary see-more"
                disabled=move || !enabled.get()
                on:click=move |_| on_click.run(())
            >
                "See more"
            </button>
        </Show>
    }
}
