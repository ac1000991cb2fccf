//! Home page: search header plus one poster board.
//!
//! SYSTEM CONTEXT
//! ==============
//! The board mode comes from the `q` query parameter, so a search is just a
//! navigation to `/?q=term`. Changing the mode or retrying after a failure
//! mounts a fresh `PosterBoard`, which starts again from page 1.

use catalog::BoardMode;
use leptos::prelude::*;
use leptos_router::components::{A, Form};
use leptos_router::hooks::use_query_map;

use crate::components::poster_board::PosterBoard;

/// Query parameter carrying the search term.
pub const SEARCH_PARAM: &str = "q";

#[component]
pub fn HomePage() -> impl IntoView {
    let query = use_query_map();
    let mode = Memo::new(move |_| {
        let term = query.read().get(SEARCH_PARAM);
        BoardMode::from_query(term.as_deref())
    });
    // Bumped by the network fallback to rebuild the board in place.
    let epoch = RwSignal::new(0_u32);

    view! {
        <div class="home-page">
            <header class="home-header">
                <A href="/" attr:class="home-header__logo">
                    "Cinegrid"
                </A>
                <Form method="GET" action="">
                    <input
                        class="home-header__search"
                        type="search"
                        name=SEARCH_PARAM
                        placeholder="Search movies"
                        prop:value=move || mode.with(|m| m.term().to_owned())
                    />
                </Form>
            </header>
            <main class="home-main">
                {move || {
                    let mode = mode.get();
                    epoch.track();
                    let on_retry = Callback::new(move |()| epoch.update(|e| *e += 1));
                    view! { <PosterBoard mode=mode on_retry=on_retry/> }
                }}
            </main>
        </div>
    }
}
