//! Effect system for card abilities.
//!
//! - `Effect` / `EffectKind`: one step of a card's resolution
//! - `EffectResolver`: applies a single effect to a snapshot
//!
//! ## Design Philosophy
//!
//! The interpreter is deliberately card-blind. Anything that depends on
//! which card is being played (selection restrictions, bonus gold,
//! replacement draws, upgrades) is handled by the resolution state machine
//! through the card's [`CardRule`](crate::cards::CardRule) tags.

mod effect;
mod resolver;

pub use effect::{Effect, EffectKind};
pub use resolver::{apply_effect, EffectResolver, ResolveResult};
