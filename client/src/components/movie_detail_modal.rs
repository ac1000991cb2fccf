//! Modal showing one movie's detail record.

use catalog::{MovieDetail, rating_label};
use leptos::prelude::*;

use crate::state::detail::DetailState;

/// Detail overlay for `movie_id`. Fetches its own record on mount.
#[component]
pub fn MovieDetailModal(movie_id: u64, on_close: Callback<()>) -> impl IntoView {
    let detail = RwSignal::new(DetailState::Loading);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_movie_detail(movie_id).await;
            if let Err(err) = &result {
                log::warn!("movie detail {movie_id} failed: {err}");
            }
            // The modal may have been closed while the request was in flight.
            let _ = detail.try_set(DetailState::from_result(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = movie_id;

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="modal-backdrop" on:click=on_backdrop>
            <div
                class="modal"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <button class="modal__close" on:click=on_close_click title="Close" aria-label="Close">
                    "✕"
                </button>
                {move || match detail.get() {
                    DetailState::Loading => view! { <p class="modal__status">"Loading…"</p> }.into_any(),
                    DetailState::Failed(message) => {
                        view! { <p class="modal__status modal__status--error">{message}</p> }.into_any()
                    }
                    DetailState::Loaded(movie) => view! { <MovieDetailBody movie=movie/> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn MovieDetailBody(movie: MovieDetail) -> impl IntoView {
    let image_url = movie.image_url();
    let genres = movie.genre_line();
    let rating = rating_label(movie.vote_average);
    let released = movie.release_date.clone().filter(|d| !d.is_empty());

    view! {
        <h2 class="modal__title">{movie.title.clone()}</h2>
        <div class="modal__body">
            {(!image_url.is_empty())
                .then(|| view! { <img class="modal__poster" src=image_url alt=movie.title.clone()/> })}
            <div class="modal__info">
                <p class="modal__meta">
                    <span class="modal__genres">{genres}</span>
                    <span class="modal__rating">"★ " {rating}</span>
                </p>
                {released.map(|d| view! { <p class="modal__released">{d}</p> })}
                <p class="modal__overview">{movie.overview.clone()}</p>
            </div>
        </div>
    }
}
