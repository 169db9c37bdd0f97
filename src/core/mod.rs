//! Core engine types: card ids, player and enemy, the snapshot, RNG,
//! configuration, and rejection reasons.
//!
//! Everything here is card-agnostic. Card behaviour lives in `cards` and
//! `effects`; transitions live in `resolution` and `rules`.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use entity::{CardInstanceId, IdAllocator};
pub use player::{Enemy, Player};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use error::{Rejection, RejectionKind};
pub use state::{GameSnapshot, Winner};
