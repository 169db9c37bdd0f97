//! Game rules: setup, the turn controller, and action dispatch.
//!
//! - `turn`: `new_game`, `deal_opening_hand`, `buy_card`, `end_turn`
//! - `engine`: `GameAction`, `apply_action`, `legal_actions`
//!
//! Card play itself lives in [`crate::resolution`].

mod engine;
mod turn;

pub use engine::{apply_action, legal_actions, try_apply_action, GameAction};
pub use turn::{
    buy_card, deal_opening_hand, end_turn, new_game, new_standard_game, try_buy_card, try_deal_opening_hand,
    try_end_turn,
};
