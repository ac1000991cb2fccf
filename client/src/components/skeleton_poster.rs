//! Content-free stand-in shown while a page is in flight.

use leptos::prelude::*;

use crate::state::display_list::SlotKey;

#[component]
pub fn SkeletonPoster(slot_key: SlotKey) -> impl IntoView {
    view! {
        <li class="item" data-slot-key=slot_key.0.to_string() aria-hidden="true">
            <div class="item-card item-card--skeleton">
                <div class="item-thumbnail skeleton"></div>
                <div class="item-title skeleton"></div>
                <div class="item-score skeleton"></div>
            </div>
        </li>
    }
}
