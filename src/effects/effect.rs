//! Effect definitions.
//!
//! An effect is one step of a card's resolution. Most effects apply
//! immediately; trash and discard effects that require a selection pause
//! resolution until the player has picked cards from hand.

use serde::{Deserialize, Serialize};

/// What an effect does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// Add gold (magnitude may be negative).
    AddGold,
    /// Add actions.
    AddAction,
    /// Add buys.
    AddBuy,
    /// Add player health.
    AddPlayerHealth,
    /// Subtract magnitude from enemy health.
    DamageEnemy,
    /// Draw magnitude cards.
    DrawCards,
    /// Move selected hand cards to the trash.
    TrashCards,
    /// Move selected hand cards to the discard pile.
    DiscardCards,
}

impl EffectKind {
    /// Kinds that operate on a player selection.
    #[must_use]
    pub const fn is_selection_kind(self) -> bool {
        matches!(self, EffectKind::TrashCards | EffectKind::DiscardCards)
    }
}

/// A single card effect.
///
/// ## Example
///
/// ```
/// use rust_deckbuilder::effects::{Effect, EffectKind};
///
/// let purge = Effect::trash(4);
/// assert_eq!(purge.kind, EffectKind::TrashCards);
/// assert!(purge.requires_selection);
/// assert_eq!(purge.max_selectable, Some(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,

    /// Signed amount; meaning depends on `kind`.
    pub magnitude: i64,

    /// Pause resolution for a hand selection.
    #[serde(default)]
    pub requires_selection: bool,

    /// Upper bound on how many cards may be selected. `None` is unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selectable: Option<usize>,

    /// Extra gold added to a trashed card's cost for the upgrade pick.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_budget: Option<i64>,

    /// Human-readable text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Effect {
    /// Create a plain effect.
    #[must_use]
    pub fn new(kind: EffectKind, magnitude: i64) -> Self {
        Self {
            kind,
            magnitude,
            requires_selection: false,
            max_selectable: None,
            upgrade_budget: None,
            description: None,
        }
    }

    #[must_use]
    pub fn add_gold(amount: i64) -> Self {
        Self::new(EffectKind::AddGold, amount)
    }

    #[must_use]
    pub fn add_actions(amount: i64) -> Self {
        Self::new(EffectKind::AddAction, amount)
    }

    #[must_use]
    pub fn add_buys(amount: i64) -> Self {
        Self::new(EffectKind::AddBuy, amount)
    }

    #[must_use]
    pub fn heal(amount: i64) -> Self {
        Self::new(EffectKind::AddPlayerHealth, amount)
    }

    #[must_use]
    pub fn damage_enemy(amount: i64) -> Self {
        Self::new(EffectKind::DamageEnemy, amount)
    }

    #[must_use]
    pub fn draw(count: i64) -> Self {
        Self::new(EffectKind::DrawCards, count)
    }

    /// Trash up to `max` cards chosen from hand.
    #[must_use]
    pub fn trash(max: usize) -> Self {
        Self {
            requires_selection: true,
            max_selectable: Some(max),
            ..Self::new(EffectKind::TrashCards, 0)
        }
    }

    /// Discard cards chosen from hand, optionally capped.
    #[must_use]
    pub fn discard(max: Option<usize>) -> Self {
        Self {
            requires_selection: true,
            max_selectable: max,
            ..Self::new(EffectKind::DiscardCards, 0)
        }
    }

    /// Set the upgrade budget.
    #[must_use]
    pub fn with_upgrade_budget(mut self, budget: i64) -> Self {
        self.upgrade_budget = Some(budget);
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Does this effect pause resolution for player input?
    #[must_use]
    pub fn awaits_selection(&self) -> bool {
        self.requires_selection && self.kind.is_selection_kind()
    }

    /// Has the selection cap been reached with `selected` cards?
    #[must_use]
    pub fn selection_full(&self, selected: usize) -> bool {
        self.max_selectable.is_some_and(|max| selected >= max)
    }
}
