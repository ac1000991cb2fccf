//! Poster card for one catalog movie.

use catalog::DisplayItem;
use leptos::prelude::*;

use crate::state::display_list::SlotKey;

/// A rendered poster. Carries its movie id for click delegation and its slot
/// key for the viewport trigger.
#[component]
pub fn MoviePoster(slot_key: SlotKey, item: DisplayItem) -> impl IntoView {
    let rating = item.rating_label();
    let thumbnail = if item.image_url.is_empty() {
        view! { <div class="item-thumbnail item-thumbnail--empty" aria-hidden="true"></div> }.into_any()
    } else {
        view! { <img class="item-thumbnail" src=item.image_url.clone() loading="lazy" alt=item.title.clone()/> }
            .into_any()
    };

    view! {
        <li class="item" data-slot-key=slot_key.0.to_string()>
            <div class="item-card" data-movie-id=item.id.to_string()>
                {thumbnail}
                <p class="item-title">{item.title}</p>
                <p class="item-score">"★ " {rating}</p>
            </div>
        </li>
    }
}
