//! # rust-deckbuilder
//!
//! A deterministic turn-state and card-resolution engine for a
//! single-player deckbuilder: the player plays cards from hand, buys cards
//! from a shop, and fights an enemy whose damage grows over time.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every operation takes a `&GameSnapshot` and
//!    returns a new one. Invalid calls return an unchanged copy.
//!
//! 2. **Waiting Is Data**: A card paused for a hand selection or an upgrade
//!    pick is a `ResolutionState` variant, not a suspended computation.
//!
//! 3. **Seeded Randomness**: The RNG lives in the snapshot, so the same seed
//!    and the same calls always produce the same game.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) snapshot clone via `im-rs`.
//!
//! - **Closed Card Rules**: Card-specific behaviour is a small set of
//!   `CardRule` tags on the template, interpreted by the resolution machine.
//!
//! ## Modules
//!
//! - `core`: Ids, player, enemy, snapshot, RNG, configuration, rejections
//! - `cards`: Templates, instances, the catalog, and the standard card set
//! - `effects`: Effect values and the single-effect interpreter
//! - `zones`: Shuffling and drawing
//! - `resolution`: Card play state machine
//! - `rules`: Setup, buying, end of turn, and action dispatch

pub mod core;
pub mod zones;
pub mod cards;
pub mod effects;
pub mod resolution;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    CardInstanceId, IdAllocator,
    GameRng, GameRngState,
    GameConfig,
    Rejection, RejectionKind,
    Player, Enemy,
    GameSnapshot, Winner,
};

pub use crate::cards::{Card, CardCatalog, CardRule, CardTemplate, TemplateId};

pub use crate::effects::{apply_effect, Effect, EffectKind, ResolveResult};

pub use crate::zones::{draw_n, shuffle};

pub use crate::resolution::{
    ActiveCard, PendingSelection, ResolutionPhase, ResolutionState,
    cancel_action, finish_action, play_card, select_card,
    try_cancel_action, try_finish_action, try_play_card, try_select_card,
};

pub use crate::rules::{
    GameAction, apply_action, legal_actions, try_apply_action,
    new_game, new_standard_game,
    deal_opening_hand, buy_card, end_turn,
    try_deal_opening_hand, try_buy_card, try_end_turn,
};
