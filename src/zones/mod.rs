//! Deck operations over the player's piles.
//!
//! - `shuffle`: Fisher–Yates permutation of a pile, input untouched
//! - `draw_n`: draw from the front of the draw pile, reshuffling the
//!   discard pile in when the draw pile runs dry

mod deck;

pub use deck::{draw_n, shuffle};
