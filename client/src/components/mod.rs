//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the poster board and its overlays. `poster_board` owns
//! the board signal; the rest are presentational and receive data and
//! callbacks through props.

pub mod movie_detail_modal;
pub mod movie_poster;
pub mod network_fallback;
pub mod poster_board;
pub mod see_more_button;
pub mod skeleton_poster;
