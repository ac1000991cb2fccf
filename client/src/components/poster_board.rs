//! Poster board component: grid, skeletons, "see more", infinite scroll.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `PosterBoardState` signal for its lifetime. Three things start
//! cycles: mounting, the "see more" button and the tail-poster observer. All
//! of them funnel through the state's single-flight guard; this module only
//! supplies the browser pieces (HTTP client, settle timer, observer, click
//! delegation).

use catalog::BoardMode;
use leptos::prelude::*;

use crate::components::movie_detail_modal::MovieDetailModal;
use crate::components::movie_poster::MoviePoster;
use crate::components::network_fallback::NetworkFallback;
use crate::components::see_more_button::SeeMoreButton;
use crate::components::skeleton_poster::SkeletonPoster;
use crate::state::display_list::{Slot, SlotContent};
use crate::state::poster_board::{BoardConfig, CycleSource, PosterBoardState};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use crate::net::api::HttpCatalog;
#[cfg(feature = "hydrate")]
use crate::state::display_list::SlotKey;
#[cfg(feature = "hydrate")]
use crate::state::poster_board::{BoardStore, CycleOutcome, run_cycle, run_intersect};
#[cfg(feature = "hydrate")]
use crate::util::intersection::TailObserver;

/// A paginated poster board for `mode`.
///
/// `on_retry` is invoked from the network fallback; the parent answers it by
/// mounting a fresh board.
#[component]
pub fn PosterBoard(
    mode: BoardMode,
    #[prop(optional)] config: Option<BoardConfig>,
    on_retry: Callback<()>,
) -> impl IntoView {
    let board = RwSignal::new(PosterBoardState::new(mode, config.unwrap_or_default()));
    let detail_id = RwSignal::new(None::<u64>);
    let list_ref = NodeRef::<leptos::html::Ul>::new();

    // First page once mounted in the browser.
    Effect::new(move || start_cycle(board, CycleSource::Initial));

    #[cfg(feature = "hydrate")]
    {
        let armed = Memo::new(move |_| board.with(|b| b.trigger().armed()));
        let observer: Rc<RefCell<Option<TailObserver>>> = Rc::default();
        Effect::new(move || {
            let armed = armed.get();
            observer.borrow_mut().take();
            let Some(key) = armed else {
                return;
            };
            let Some(list) = list_ref.get() else {
                return;
            };
            let selector = format!("[data-slot-key=\"{}\"]", key.0);
            let Ok(Some(target)) = list.query_selector(&selector) else {
                log::warn!("poster board: armed slot {} is not in the DOM", key.0);
                return;
            };
            *observer.borrow_mut() = TailObserver::observe(&target, move || start_intersect(board, key));
        });
    }

    let on_list_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(id) = clicked_movie_id(&ev) {
                detail_id.set(Some(id));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let manual_visible = Signal::derive(move || board.with(PosterBoardState::manual_control_visible));
    let manual_enabled = Signal::derive(move || board.with(PosterBoardState::manual_control_enabled));
    let on_see_more = Callback::new(move |()| start_cycle(board, CycleSource::Manual));

    view! {
        <Show
            when=move || !board.with(PosterBoardState::is_failed)
            fallback=move || {
                let (mode, reason) = board.with_untracked(|b| (b.mode().clone(), b.failure().map(ToString::to_string)));
                view! { <NetworkFallback mode=mode reason=reason on_retry=on_retry/> }
            }
        >
            <section class="item-view">
                <h2 class="item-view__headline">{move || board.with(PosterBoardState::headline)}</h2>
                <ul class="item-list" node_ref=list_ref on:click=on_list_click>
                    <For
                        each=move || board.with(|b| b.list().slots().to_vec())
                        key=|slot| slot.key
                        children=render_slot
                    />
                </ul>
                <SeeMoreButton visible=manual_visible enabled=manual_enabled on_click=on_see_more/>
            </section>
        </Show>
        {move || {
            detail_id
                .get()
                .map(|id| {
                    view! { <MovieDetailModal movie_id=id on_close=Callback::new(move |()| detail_id.set(None))/> }
                })
        }}
    }
}

fn render_slot(slot: Slot) -> AnyView {
    match slot.content {
        SlotContent::Placeholder => view! { <SkeletonPoster slot_key=slot.key/> }.into_any(),
        SlotContent::Poster(item) => view! { <MoviePoster slot_key=slot.key item=item/> }.into_any(),
    }
}

/// Kick off a cycle in the background. No-op outside the browser.
fn start_cycle(board: RwSignal<PosterBoardState>, source: CycleSource) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let outcome = run_cycle(&board, &HttpCatalog, source).await;
            settle_and_rearm(board, outcome).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (board, source);
    }
}

#[cfg(feature = "hydrate")]
fn start_intersect(board: RwSignal<PosterBoardState>, key: SlotKey) {
    leptos::task::spawn_local(async move {
        let outcome = run_intersect(&board, &HttpCatalog, key).await;
        settle_and_rearm(board, outcome).await;
    });
}

/// Wait for layout to settle, then point the trigger at the new tail.
#[cfg(feature = "hydrate")]
async fn settle_and_rearm(board: RwSignal<PosterBoardState>, outcome: Option<CycleOutcome>) {
    let Some(CycleOutcome::Appended { rearm: Some(ticket), .. }) = outcome else {
        return;
    };
    if let Some(delay) = board.try_with_untracked(|b| b.config().settle_delay).flatten() {
        gloo_timers::future::sleep(delay).await;
    }
    let _ = board.with_board(|b| b.arm_viewport(ticket));
}

/// Resolve a click inside the grid to the poster's movie id.
#[cfg(feature = "hydrate")]
fn clicked_movie_id(ev: &leptos::ev::MouseEvent) -> Option<u64> {
    use crate::state::detail::{MOVIE_ID_ATTR, POSTER_CARD_SELECTOR, movie_id_from_attr};
    use wasm_bindgen::JsCast as _;

    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let card = target.closest(POSTER_CARD_SELECTOR).ok().flatten()?;
    movie_id_from_attr(card.get_attribute(MOVIE_ID_ATTR))
}
