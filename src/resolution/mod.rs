//! Card resolution state machine.
//!
//! Playing a card walks its effects in order. Resolution pauses when an
//! effect needs a hand selection and, for upgrade cards, when a shop pick is
//! owed. Pauses are data, not blocked threads: the caller drives the next
//! transition.
//!
//! ```text
//! Idle ──play──▶ (Resolving) ──effect awaits input──▶ AwaitingSelection
//!  ▲                 │                                   │      │
//!  │                 └──────── all effects done ◀────────┘      │
//!  │                                           finish (trash +  │
//!  │                                           upgrade rule)    ▼
//!  └──── cancel / complete ◀── buy from shop / forfeit ── AwaitingUpgradeTarget
//! ```
//!
//! `Resolving` only exists inside an operation; between operations the
//! state is always one of the three [`ResolutionState`] variants.

mod machine;

pub use machine::{
    cancel_action, finish_action, play_card, select_card, try_cancel_action, try_finish_action,
    try_play_card, try_select_card,
};
pub(crate) use machine::try_pick_upgrade;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::effects::Effect;

/// The card currently mid-resolution.
///
/// While active the card belongs to neither hand nor any pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveCard {
    pub card: Card,
    /// Cursor into the card's effects.
    pub effect_index: usize,
}

impl ActiveCard {
    #[must_use]
    pub fn new(card: Card) -> Self {
        Self {
            card,
            effect_index: 0,
        }
    }

    /// The effect under the cursor.
    #[must_use]
    pub fn current_effect(&self) -> Option<&Effect> {
        self.card.effects().get(self.effect_index)
    }

    /// Actions gained by `AddAction` effects before the cursor.
    #[must_use]
    pub fn actions_gained(&self) -> i64 {
        self.card.effects()[..self.effect_index.min(self.card.effects().len())]
            .iter()
            .filter(|e| e.kind == crate::effects::EffectKind::AddAction)
            .map(|e| e.magnitude)
            .sum()
    }
}

/// Cards picked so far for a paused trash/discard effect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSelection {
    pub effect_index: usize,
    /// Selection order preserved; held outside hand and piles.
    pub cards: SmallVec<[Card; 4]>,
}

impl PendingSelection {
    #[must_use]
    pub fn new(effect_index: usize) -> Self {
        Self {
            effect_index,
            cards: SmallVec::new(),
        }
    }
}

/// Where resolution stands between operations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionState {
    /// No card is active.
    #[default]
    Idle,

    /// A trash/discard effect waits for hand selections.
    AwaitingSelection {
        active: ActiveCard,
        selection: PendingSelection,
    },

    /// A trashed card is being upgraded; a shop card costing at most
    /// `budget` may be taken.
    AwaitingUpgradeTarget { active: ActiveCard, budget: i64 },
}

/// Phase tag for [`ResolutionState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionPhase {
    Idle,
    AwaitingSelection,
    AwaitingUpgradeTarget,
}

impl ResolutionState {
    #[must_use]
    pub fn phase(&self) -> ResolutionPhase {
        match self {
            ResolutionState::Idle => ResolutionPhase::Idle,
            ResolutionState::AwaitingSelection { .. } => ResolutionPhase::AwaitingSelection,
            ResolutionState::AwaitingUpgradeTarget { .. } => ResolutionPhase::AwaitingUpgradeTarget,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, ResolutionState::Idle)
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveCard> {
        match self {
            ResolutionState::Idle => None,
            ResolutionState::AwaitingSelection { active, .. }
            | ResolutionState::AwaitingUpgradeTarget { active, .. } => Some(active),
        }
    }

    #[must_use]
    pub fn selection(&self) -> Option<&PendingSelection> {
        match self {
            ResolutionState::AwaitingSelection { selection, .. } => Some(selection),
            _ => None,
        }
    }

    #[must_use]
    pub fn upgrade_budget(&self) -> Option<i64> {
        match self {
            ResolutionState::AwaitingUpgradeTarget { budget, .. } => Some(*budget),
            _ => None,
        }
    }
}
