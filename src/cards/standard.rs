//! The standard card set.
//!
//! Starter cards (Copper, Punch) plus the shop stock. Numbers here are
//! content, not engine rules; games may register their own catalog.

use super::definition::{CardRule, CardTemplate, TemplateId};
use super::registry::CardCatalog;
use crate::effects::Effect;

pub const COPPER: TemplateId = TemplateId::new(0);
pub const PUNCH: TemplateId = TemplateId::new(1);
pub const STAB: TemplateId = TemplateId::new(2);
pub const DIAMOND: TemplateId = TemplateId::new(3);
pub const QUICK_HANDS: TemplateId = TemplateId::new(4);
pub const MEDKIT: TemplateId = TemplateId::new(5);
pub const BAZAAR: TemplateId = TemplateId::new(6);
pub const PURGE: TemplateId = TemplateId::new(7);
pub const SMELTER: TemplateId = TemplateId::new(8);
pub const RUMMAGE: TemplateId = TemplateId::new(9);
pub const REFORGE: TemplateId = TemplateId::new(10);

/// Templates stocked in the shop, cheapest first.
pub const SHOP_TEMPLATES: [TemplateId; 9] = [
    RUMMAGE, STAB, PURGE, BAZAAR, SMELTER, REFORGE, DIAMOND, MEDKIT, QUICK_HANDS,
];

/// All standard templates.
#[must_use]
pub fn templates() -> Vec<CardTemplate> {
    vec![
        CardTemplate::new(COPPER, "Copper").with_effect(Effect::add_gold(1)),
        CardTemplate::new(PUNCH, "Punch")
            .with_action_cost(1)
            .with_effect(Effect::damage_enemy(1)),
        CardTemplate::new(STAB, "Stab")
            .with_gold_cost(3)
            .with_action_cost(1)
            .with_effect(Effect::damage_enemy(2)),
        CardTemplate::new(DIAMOND, "Diamond")
            .with_gold_cost(5)
            .with_effect(Effect::add_gold(3)),
        CardTemplate::new(QUICK_HANDS, "Quick Hands")
            .with_gold_cost(7)
            .with_action_cost(1)
            .with_effect(Effect::add_actions(1))
            .with_effect(Effect::draw(2)),
        CardTemplate::new(MEDKIT, "Med-kit")
            .with_gold_cost(6)
            .with_action_cost(1)
            .with_effect(Effect::heal(3)),
        CardTemplate::new(BAZAAR, "Bazaar")
            .with_gold_cost(4)
            .with_action_cost(1)
            .with_effect(Effect::add_buys(1))
            .with_effect(Effect::add_gold(1)),
        CardTemplate::new(PURGE, "Purge")
            .with_gold_cost(3)
            .with_action_cost(1)
            .with_effect(Effect::trash(4).with_description("Trash up to 4 cards from your hand")),
        CardTemplate::new(SMELTER, "Smelter")
            .with_gold_cost(4)
            .with_action_cost(1)
            .with_effect(
                Effect::trash(1).with_description("Trash a Copper from your hand for +2 gold"),
            )
            .with_rule(CardRule::SelectOnly(COPPER))
            .with_rule(CardRule::TrashBonusGold(2)),
        CardTemplate::new(RUMMAGE, "Rummage")
            .with_gold_cost(2)
            .with_effect(Effect::add_actions(1))
            .with_effect(
                Effect::discard(None).with_description("Discard any number of cards, then draw that many"),
            )
            .with_rule(CardRule::DrawPerDiscard),
        CardTemplate::new(REFORGE, "Reforge")
            .with_gold_cost(4)
            .with_action_cost(1)
            .with_effect(
                Effect::trash(1)
                    .with_upgrade_budget(2)
                    .with_description("Trash a card, gain a card costing up to 2 more"),
            )
            .with_rule(CardRule::UpgradeFromShop),
    ]
}

/// Build a catalog holding every standard template.
#[must_use]
pub fn catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();
    for template in templates() {
        catalog.register(template);
    }
    catalog
}
