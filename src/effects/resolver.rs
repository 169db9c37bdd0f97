//! Effect resolution - applying one effect to a snapshot.
//!
//! The resolver knows nothing about the card being played: it applies a
//! single effect and reports whether resolution may continue.

use crate::core::state::{GameSnapshot, Winner};
use crate::zones;

use super::{Effect, EffectKind};

/// Result of resolving an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Effect applied; resolution may continue.
    Applied,
    /// Effect needs a hand selection before it can complete.
    AwaitingSelection,
    /// Effect has nothing to do (unselected trash/discard).
    Skipped,
}

/// Resolves effects on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Apply one effect in place.
    ///
    /// Never fails. Health may go negative here; clamping happens at the
    /// end-of-turn lethality check. Enemy defeat ends the game immediately.
    pub fn resolve(state: &mut GameSnapshot, effect: &Effect) -> ResolveResult {
        log::trace!("resolving {:?} {}", effect.kind, effect.magnitude);

        match effect.kind {
            EffectKind::AddGold => state.player.gold += effect.magnitude,
            EffectKind::AddAction => state.player.actions_remaining += effect.magnitude,
            EffectKind::AddBuy => state.player.buys_remaining += effect.magnitude,
            EffectKind::AddPlayerHealth => state.player.health += effect.magnitude,

            EffectKind::DamageEnemy => {
                state.enemy.health -= effect.magnitude;
                if state.enemy.is_defeated() {
                    state.conclude(Winner::Player);
                }
            }

            EffectKind::DrawCards => {
                let count = usize::try_from(effect.magnitude).unwrap_or(0);
                zones::draw_n(&mut state.player, count, &mut state.rng);
            }

            EffectKind::TrashCards | EffectKind::DiscardCards => {
                return if effect.requires_selection {
                    ResolveResult::AwaitingSelection
                } else {
                    ResolveResult::Skipped
                };
            }
        }

        ResolveResult::Applied
    }
}

/// Apply one effect to a copy of `snapshot`.
///
/// The input is left untouched. Selection effects come back as
/// [`ResolveResult::AwaitingSelection`] with an otherwise unchanged copy.
#[must_use]
pub fn apply_effect(snapshot: &GameSnapshot, effect: &Effect) -> (GameSnapshot, ResolveResult) {
    let mut next = snapshot.clone();
    let result = EffectResolver::resolve(&mut next, effect);
    (next, result)
}
