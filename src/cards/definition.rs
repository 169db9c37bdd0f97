//! Card templates - static card data.
//!
//! `CardTemplate` holds the immutable properties of a card type.
//! For example, "Stab" costs 3 gold, 1 action, and deals 2 damage -
//! these are part of the template.
//!
//! Per-copy identity lives in [`Card`](super::Card).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::effects::Effect;

/// Identifier for a card template (the "kind" of card, not a copy).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemplateId(pub u32);

impl TemplateId {
    /// Create a new template ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Template({})", self.0)
    }
}

/// Card-specific behaviour layered on top of the plain effect list.
///
/// The set is closed: a new special card is added by extending this enum,
/// never by inspecting names or ids at resolution time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardRule {
    /// Only copies of this template may be picked for the card's selections.
    SelectOnly(TemplateId),

    /// Grant gold when the card's trash effect trashes at least one card.
    TrashBonusGold(i64),

    /// Draw one replacement for each card discarded by the card's discard effect.
    DrawPerDiscard,

    /// Trashing a card grants a pick from the shop costing up to the
    /// trashed card's cost plus the effect's upgrade budget.
    UpgradeFromShop,
}

/// Static card template.
///
/// ## Example
///
/// ```
/// use rust_deckbuilder::cards::{CardTemplate, TemplateId};
/// use rust_deckbuilder::effects::Effect;
///
/// let stab = CardTemplate::new(TemplateId::new(2), "Stab")
///     .with_gold_cost(3)
///     .with_action_cost(1)
///     .with_effect(Effect::damage_enemy(2));
///
/// assert_eq!(stab.effects.len(), 1);
/// assert!(stab.is_valid());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Unique identifier for this template.
    pub id: TemplateId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Gold needed to buy a copy from the shop.
    pub gold_cost: i64,

    /// Actions spent to play a copy.
    pub action_cost: i64,

    /// Effects resolved in order when played.
    pub effects: Vec<Effect>,

    /// Card-specific behaviour tags.
    #[serde(default)]
    pub rules: SmallVec<[CardRule; 2]>,
}

impl CardTemplate {
    /// Create a template with no cost and no effects.
    #[must_use]
    pub fn new(id: TemplateId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gold_cost: 0,
            action_cost: 0,
            effects: Vec::new(),
            rules: SmallVec::new(),
        }
    }

    /// Set the shop price.
    #[must_use]
    pub fn with_gold_cost(mut self, cost: i64) -> Self {
        self.gold_cost = cost;
        self
    }

    /// Set the action cost.
    #[must_use]
    pub fn with_action_cost(mut self, cost: i64) -> Self {
        self.action_cost = cost;
        self
    }

    /// Append an effect.
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Attach a behaviour tag.
    #[must_use]
    pub fn with_rule(mut self, rule: CardRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// A playable template has at least one effect and a non-negative action cost.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.effects.is_empty() && self.action_cost >= 0
    }

    /// Check for a behaviour tag.
    #[must_use]
    pub fn has_rule(&self, rule: &CardRule) -> bool {
        self.rules.contains(rule)
    }

    /// The template restriction for selections, if any.
    #[must_use]
    pub fn selection_restriction(&self) -> Option<TemplateId> {
        self.rules.iter().find_map(|r| match r {
            CardRule::SelectOnly(id) => Some(*id),
            _ => None,
        })
    }

    /// Gold granted after a successful trash, if any.
    #[must_use]
    pub fn trash_bonus_gold(&self) -> Option<i64> {
        self.rules.iter().find_map(|r| match r {
            CardRule::TrashBonusGold(gold) => Some(*gold),
            _ => None,
        })
    }
}
