//! Card instances - one physical copy of a template.
//!
//! `Card` pairs a unique [`CardInstanceId`] with a shared, immutable
//! template. Cloning a card is cheap (an `Arc` bump), which keeps the
//! persistent piles in a snapshot cheap to clone as well.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::definition::{CardRule, CardTemplate, TemplateId};
use crate::core::entity::CardInstanceId;
use crate::effects::Effect;

/// A card copy in a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique id for this copy.
    pub id: CardInstanceId,

    /// Shared template data.
    pub template: Arc<CardTemplate>,
}

impl Card {
    /// Create a copy of `template` with the given id.
    #[must_use]
    pub fn new(id: CardInstanceId, template: Arc<CardTemplate>) -> Self {
        Self { id, template }
    }

    #[must_use]
    pub fn template_id(&self) -> TemplateId {
        self.template.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.template.name
    }

    #[must_use]
    pub fn gold_cost(&self) -> i64 {
        self.template.gold_cost
    }

    #[must_use]
    pub fn action_cost(&self) -> i64 {
        self.template.action_cost
    }

    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        &self.template.effects
    }

    /// Check for a behaviour tag on the template.
    #[must_use]
    pub fn has_rule(&self, rule: &CardRule) -> bool {
        self.template.has_rule(rule)
    }

    /// Can `candidate` be picked by this card's selection effects?
    #[must_use]
    pub fn accepts_selection(&self, candidate: &Card) -> bool {
        self.template
            .selection_restriction()
            .map_or(true, |only| candidate.template_id() == only)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.template.name, self.id)
    }
}
