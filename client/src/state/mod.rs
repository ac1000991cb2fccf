//! Client-side state for poster boards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs held in Leptos signals by the components. Every transition
//! is synchronous and browser-free; async fetches and timers stay in the
//! component layer and in [`poster_board::run_cycle`].

pub mod cursor;
pub mod detail;
pub mod display_list;
pub mod poster_board;
pub mod viewport;

#[cfg(test)]
mod test_support;
