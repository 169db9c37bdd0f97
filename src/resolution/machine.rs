//! Transitions of the card resolution state machine.
//!
//! Every public operation comes in two flavours:
//! - `try_*` returns `Err(Rejection)` when preconditions fail
//! - the plain form is total and returns an unchanged copy instead

use std::sync::Arc;

use crate::cards::CardRule;
use crate::core::entity::CardInstanceId;
use crate::core::error::{ensure_live, settle, Rejection};
use crate::core::state::GameSnapshot;
use crate::effects::{EffectKind, EffectResolver, ResolveResult};
use crate::zones;

use super::{ActiveCard, PendingSelection, ResolutionState};

/// Play a card from hand.
///
/// Rejected while another card is active, when the card is not in hand,
/// or when the player cannot pay its action cost.
pub fn try_play_card(snapshot: &GameSnapshot, card: CardInstanceId) -> Result<GameSnapshot, Rejection> {
    ensure_live(snapshot)?;
    if !snapshot.resolution.is_idle() {
        return Err(Rejection::CardActive);
    }

    let cost = snapshot
        .player
        .hand_card(card)
        .ok_or(Rejection::NotInHand(card))?
        .action_cost();
    let available = snapshot.player.actions_remaining;
    if available < cost {
        return Err(Rejection::NotEnoughActions {
            required: cost,
            available,
        });
    }

    let mut next = snapshot.clone();
    let played = next.player.take_from_hand(card).ok_or(Rejection::NotInHand(card))?;
    next.player.actions_remaining -= cost;
    log::debug!("playing {played}");

    advance(&mut next, ActiveCard::new(played));
    Ok(next)
}

#[must_use]
pub fn play_card(snapshot: &GameSnapshot, card: CardInstanceId) -> GameSnapshot {
    settle(snapshot, "play_card", try_play_card(snapshot, card))
}

/// Pick a hand card for the paused trash/discard effect.
pub fn try_select_card(snapshot: &GameSnapshot, card: CardInstanceId) -> Result<GameSnapshot, Rejection> {
    ensure_live(snapshot)?;
    let ResolutionState::AwaitingSelection { active, selection } = &snapshot.resolution else {
        return Err(Rejection::NotAwaitingSelection);
    };

    let candidate = snapshot.player.hand_card(card).ok_or(Rejection::NotInHand(card))?;
    if !active.card.accepts_selection(candidate) {
        return Err(Rejection::IneligibleSelection(card));
    }
    if let Some(max) = active.current_effect().and_then(|e| e.max_selectable) {
        if selection.cards.len() >= max {
            return Err(Rejection::SelectionCapReached { max });
        }
    }

    let mut next = snapshot.clone();
    let picked = next.player.take_from_hand(card).ok_or(Rejection::NotInHand(card))?;
    if let ResolutionState::AwaitingSelection { selection, .. } = &mut next.resolution {
        selection.cards.push(picked);
    }
    Ok(next)
}

#[must_use]
pub fn select_card(snapshot: &GameSnapshot, card: CardInstanceId) -> GameSnapshot {
    settle(snapshot, "select_card", try_select_card(snapshot, card))
}

/// Abort the card being resolved.
///
/// Selected cards and the active card go back to hand, the action cost is
/// refunded, and actions granted by already-resolved `AddAction` effects
/// are taken back. Gold, damage, healing, buys, and draws stay applied.
pub fn try_cancel_action(snapshot: &GameSnapshot) -> Result<GameSnapshot, Rejection> {
    ensure_live(snapshot)?;

    let mut next = snapshot.clone();
    match std::mem::take(&mut next.resolution) {
        ResolutionState::AwaitingSelection { active, selection } => {
            next.player.hand.extend(selection.cards);
            next.player.actions_remaining += active.card.action_cost() - active.actions_gained();
            log::debug!("cancelled {}", active.card);
            next.player.hand.push_back(active.card);
            Ok(next)
        }
        ResolutionState::AwaitingUpgradeTarget { .. } => Err(Rejection::UpgradePending),
        ResolutionState::Idle => Err(Rejection::NoActiveCard),
    }
}

#[must_use]
pub fn cancel_action(snapshot: &GameSnapshot) -> GameSnapshot {
    settle(snapshot, "cancel_action", try_cancel_action(snapshot))
}

/// Commit the pending selection and continue resolving.
///
/// During an upgrade pick this forfeits the pick instead.
pub fn try_finish_action(snapshot: &GameSnapshot) -> Result<GameSnapshot, Rejection> {
    ensure_live(snapshot)?;

    let mut next = snapshot.clone();
    match std::mem::take(&mut next.resolution) {
        ResolutionState::AwaitingSelection { active, selection } => {
            commit_selection(&mut next, active, selection);
            Ok(next)
        }
        ResolutionState::AwaitingUpgradeTarget { mut active, budget } => {
            log::debug!("upgrade pick forfeited (budget {budget})");
            active.effect_index += 1;
            advance(&mut next, active);
            Ok(next)
        }
        ResolutionState::Idle => Err(Rejection::NotAwaitingSelection),
    }
}

#[must_use]
pub fn finish_action(snapshot: &GameSnapshot) -> GameSnapshot {
    settle(snapshot, "finish_action", try_finish_action(snapshot))
}

/// Take a shop card as the upgrade reward.
///
/// No gold or buy is spent. Over-budget picks are rejected.
pub(crate) fn try_pick_upgrade(
    snapshot: &GameSnapshot,
    card: CardInstanceId,
) -> Result<GameSnapshot, Rejection> {
    ensure_live(snapshot)?;
    let Some(budget) = snapshot.resolution.upgrade_budget() else {
        return Err(Rejection::NotAwaitingSelection);
    };

    let cost = snapshot.shop_card(card).ok_or(Rejection::NotInShop(card))?.gold_cost();
    if cost > budget {
        return Err(Rejection::OverBudget { card, cost, budget });
    }

    let mut next = snapshot.clone();
    let ResolutionState::AwaitingUpgradeTarget { mut active, .. } = std::mem::take(&mut next.resolution) else {
        return Err(Rejection::NotAwaitingSelection);
    };
    let gained = next.take_from_shop(card).ok_or(Rejection::NotInShop(card))?;
    log::debug!("upgraded into {gained}");
    next.player.discard_pile.push_back(gained);

    active.effect_index += 1;
    advance(&mut next, active);
    Ok(next)
}

/// Resolve effects from the cursor until the card completes or pauses.
///
/// On completion the card goes to the discard pile and the state returns to
/// `Idle`. Lethal damage does not stop the loop: the rest of the card still
/// resolves.
fn advance(state: &mut GameSnapshot, mut active: ActiveCard) {
    let template = Arc::clone(&active.card.template);

    while let Some(effect) = template.effects.get(active.effect_index) {
        match EffectResolver::resolve(state, effect) {
            ResolveResult::AwaitingSelection => {
                let selection = PendingSelection::new(active.effect_index);
                state.resolution = ResolutionState::AwaitingSelection { active, selection };
                return;
            }
            ResolveResult::Applied | ResolveResult::Skipped => active.effect_index += 1,
        }
    }

    log::debug!("{} resolved", active.card);
    state.player.discard_pile.push_back(active.card);
    state.resolution = ResolutionState::Idle;
}

fn commit_selection(state: &mut GameSnapshot, mut active: ActiveCard, selection: PendingSelection) {
    let template = Arc::clone(&active.card.template);
    let Some(effect) = template.effects.get(active.effect_index) else {
        state.player.hand.extend(selection.cards);
        advance(state, active);
        return;
    };
    let count = selection.cards.len();

    match effect.kind {
        EffectKind::TrashCards => {
            let highest_cost = selection.cards.iter().map(|c| c.gold_cost()).max();
            state.player.trash_pile.extend(selection.cards);

            if count > 0 {
                if let Some(gold) = template.trash_bonus_gold() {
                    state.player.gold += gold;
                }
            }

            let upgrade_base = highest_cost.filter(|_| template.has_rule(&CardRule::UpgradeFromShop));
            if let Some(cost) = upgrade_base {
                let budget = cost + effect.upgrade_budget.unwrap_or(0);
                if state.shop.iter().any(|c| c.gold_cost() <= budget) {
                    state.resolution = ResolutionState::AwaitingUpgradeTarget { active, budget };
                    return;
                }
                log::debug!("no shop card fits upgrade budget {budget}, skipping the pick");
            }
        }
        EffectKind::DiscardCards => {
            state.player.discard_pile.extend(selection.cards);
            if template.has_rule(&CardRule::DrawPerDiscard) {
                zones::draw_n(&mut state.player, count, &mut state.rng);
            }
        }
        _ => state.player.hand.extend(selection.cards),
    }

    active.effect_index += 1;
    advance(state, active);
}

#[cfg(test)]
mod tests {
    use im::Vector;

    use super::*;
    use crate::cards::{standard, Card, CardCatalog, TemplateId};
    use crate::core::{GameConfig, Winner};
    use crate::resolution::ResolutionPhase;

    /// A game whose hand holds one copy of each requested template.
    fn game_with_hand(hand: &[TemplateId]) -> GameSnapshot {
        let catalog = standard::catalog();
        let mut game = GameSnapshot::new(GameConfig::default(), &catalog, 42);
        game.player.hand = hand
            .iter()
            .map(|id| catalog.instantiate(*id, &mut game.ids).unwrap())
            .collect();
        game
    }

    fn hand_id(game: &GameSnapshot, template: TemplateId) -> CardInstanceId {
        game.player
            .hand
            .iter()
            .find(|c| c.template_id() == template)
            .unwrap()
            .id
    }

    fn hand_ids(game: &GameSnapshot, template: TemplateId) -> Vec<CardInstanceId> {
        game.player
            .hand
            .iter()
            .filter(|c| c.template_id() == template)
            .map(|c| c.id)
            .collect()
    }

    #[test]
    fn test_play_simple_card() {
        let game = game_with_hand(&[standard::STAB]);
        let stab = hand_id(&game, standard::STAB);

        let next = play_card(&game, stab);

        assert_eq!(next.enemy.health, 18);
        assert_eq!(next.player.actions_remaining, 0);
        assert!(next.player.hand.is_empty());
        assert_eq!(next.player.discard_pile.back().unwrap().id, stab);
        assert!(next.resolution.is_idle());
        // Input untouched.
        assert_eq!(game.player.hand.len(), 1);
    }

    #[test]
    fn test_play_rejections() {
        let mut game = game_with_hand(&[standard::PUNCH]);
        let punch = hand_id(&game, standard::PUNCH);

        assert_eq!(
            try_play_card(&game, CardInstanceId(9999)),
            Err(Rejection::NotInHand(CardInstanceId(9999)))
        );

        game.player.actions_remaining = 0;
        assert_eq!(
            try_play_card(&game, punch),
            Err(Rejection::NotEnoughActions {
                required: 1,
                available: 0
            })
        );
        assert_eq!(play_card(&game, punch), game);
    }

    #[test]
    fn test_zero_cost_card_needs_no_actions() {
        let mut game = game_with_hand(&[standard::COPPER]);
        game.player.actions_remaining = 0;

        let next = play_card(&game, hand_id(&game, standard::COPPER));
        assert_eq!(next.player.gold, 1);
    }

    #[test]
    fn test_multi_effect_card() {
        let game = game_with_hand(&[standard::QUICK_HANDS]);

        let next = play_card(&game, hand_id(&game, standard::QUICK_HANDS));

        assert_eq!(next.player.actions_remaining, 1);
        assert_eq!(next.player.hand.len(), 2);
        assert_eq!(next.player.draw_pile.len(), 8);
    }

    #[test]
    fn test_selection_pauses_resolution() {
        let game = game_with_hand(&[standard::PURGE, standard::COPPER]);

        let next = play_card(&game, hand_id(&game, standard::PURGE));

        assert_eq!(next.phase(), ResolutionPhase::AwaitingSelection);
        assert_eq!(next.active_effect_index(), Some(0));
        assert!(next.awaiting_input());
        assert_eq!(next.active_card().unwrap().template_id(), standard::PURGE);
    }

    #[test]
    fn test_no_reentrant_play() {
        let game = game_with_hand(&[standard::PURGE, standard::COPPER]);
        let paused = play_card(&game, hand_id(&game, standard::PURGE));

        assert_eq!(
            try_play_card(&paused, hand_id(&paused, standard::COPPER)),
            Err(Rejection::CardActive)
        );
    }

    #[test]
    fn test_trash_selection_commits() {
        let game = game_with_hand(&[standard::PURGE, standard::COPPER, standard::COPPER, standard::PUNCH]);
        let coppers = hand_ids(&game, standard::COPPER);

        let mut next = play_card(&game, hand_id(&game, standard::PURGE));
        next = select_card(&next, coppers[0]);
        next = select_card(&next, coppers[1]);
        assert_eq!(next.selected_cards().len(), 2);
        assert_eq!(next.player.hand.len(), 1);

        next = finish_action(&next);

        assert!(next.resolution.is_idle());
        assert_eq!(next.player.trash_pile.len(), 2);
        assert_eq!(next.player.hand.len(), 1);
        assert_eq!(next.player.discard_pile.back().unwrap().template_id(), standard::PURGE);
    }

    #[test]
    fn test_finish_with_empty_selection() {
        let game = game_with_hand(&[standard::PURGE]);

        let next = finish_action(&play_card(&game, hand_id(&game, standard::PURGE)));

        assert!(next.resolution.is_idle());
        assert!(next.player.trash_pile.is_empty());
        assert_eq!(next.player.discard_pile.len(), 1);
    }

    #[test]
    fn test_selection_cap() {
        let game = game_with_hand(&[standard::REFORGE, standard::COPPER, standard::PUNCH]);
        let copper = hand_id(&game, standard::COPPER);
        let punch = hand_id(&game, standard::PUNCH);

        let paused = select_card(&play_card(&game, hand_id(&game, standard::REFORGE)), copper);
        assert_eq!(try_select_card(&paused, punch), Err(Rejection::SelectionCapReached { max: 1 }));
        assert_eq!(select_card(&paused, punch), paused);
    }

    #[test]
    fn test_selection_restriction() {
        let game = game_with_hand(&[standard::SMELTER, standard::COPPER, standard::PUNCH]);
        let paused = play_card(&game, hand_id(&game, standard::SMELTER));
        let punch = hand_id(&paused, standard::PUNCH);

        assert_eq!(try_select_card(&paused, punch), Err(Rejection::IneligibleSelection(punch)));

        let next = finish_action(&select_card(&paused, hand_id(&paused, standard::COPPER)));
        assert_eq!(next.player.gold, 2);
        assert_eq!(next.player.trash_pile.len(), 1);
    }

    #[test]
    fn test_trash_bonus_needs_a_trashed_card() {
        let game = game_with_hand(&[standard::SMELTER]);
        let next = finish_action(&play_card(&game, hand_id(&game, standard::SMELTER)));
        assert_eq!(next.player.gold, 0);
    }

    #[test]
    fn test_select_requires_pause() {
        let game = game_with_hand(&[standard::COPPER]);
        assert_eq!(
            try_select_card(&game, hand_id(&game, standard::COPPER)),
            Err(Rejection::NotAwaitingSelection)
        );
        assert_eq!(try_finish_action(&game), Err(Rejection::NotAwaitingSelection));
        assert_eq!(try_cancel_action(&game), Err(Rejection::NoActiveCard));
    }

    #[test]
    fn test_same_card_cannot_be_selected_twice() {
        let game = game_with_hand(&[standard::PURGE, standard::COPPER]);
        let copper = hand_id(&game, standard::COPPER);

        let once = select_card(&play_card(&game, hand_id(&game, standard::PURGE)), copper);
        assert_eq!(try_select_card(&once, copper), Err(Rejection::NotInHand(copper)));
    }

    #[test]
    fn test_discard_draws_replacements() {
        let game = game_with_hand(&[standard::RUMMAGE, standard::PUNCH, standard::PUNCH]);
        let punches = hand_ids(&game, standard::PUNCH);

        let mut next = play_card(&game, hand_id(&game, standard::RUMMAGE));
        assert_eq!(next.player.actions_remaining, 2);
        next = select_card(&next, punches[0]);
        next = select_card(&next, punches[1]);
        next = finish_action(&next);

        assert!(next.resolution.is_idle());
        assert_eq!(next.player.hand.len(), 2);
        assert_eq!(next.player.draw_pile.len(), 8);
        // Two punches and the rummage itself.
        assert_eq!(next.player.discard_pile.len(), 3);
    }

    #[test]
    fn test_cancel_reverts_actions_and_cards() {
        let game = game_with_hand(&[standard::RUMMAGE, standard::PUNCH]);
        let punch = hand_id(&game, standard::PUNCH);
        let rummage = hand_id(&game, standard::RUMMAGE);

        let selected = select_card(&play_card(&game, rummage), punch);
        let cancelled = cancel_action(&selected);

        assert!(cancelled.resolution.is_idle());
        assert_eq!(cancelled.player.actions_remaining, game.player.actions_remaining);
        let mut ids: Vec<_> = cancelled.player.hand.iter().map(|c| c.id).collect();
        ids.sort();
        let mut expected = vec![punch, rummage];
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_cancel_keeps_non_action_effects() {
        let mut catalog = CardCatalog::new();
        catalog.register(
            crate::cards::CardTemplate::new(TemplateId::new(50), "Scheme")
                .with_action_cost(1)
                .with_effect(crate::effects::Effect::add_gold(2))
                .with_effect(crate::effects::Effect::add_actions(2))
                .with_effect(crate::effects::Effect::draw(1))
                .with_effect(crate::effects::Effect::trash(1)),
        );
        let mut game = GameSnapshot::new(GameConfig::default(), &standard::catalog(), 5);
        let scheme = catalog.instantiate(TemplateId::new(50), &mut game.ids).unwrap();
        let scheme_id = scheme.id;
        game.player.hand = Vector::unit(scheme);

        let paused = play_card(&game, scheme_id);
        assert_eq!(paused.player.actions_remaining, 2);

        let cancelled = cancel_action(&paused);

        assert_eq!(cancelled.player.actions_remaining, 1);
        assert_eq!(cancelled.player.gold, 2);
        assert_eq!(cancelled.player.hand.len(), 2);
        assert!(cancelled.player.hand.iter().any(|c: &Card| c.id == scheme_id));
    }

    #[test]
    fn test_upgrade_flow() {
        let game = game_with_hand(&[standard::REFORGE, standard::PUNCH]);
        let punch = hand_id(&game, standard::PUNCH);

        let mut next = play_card(&game, hand_id(&game, standard::REFORGE));
        next = select_card(&next, punch);
        next = finish_action(&next);

        assert_eq!(next.phase(), ResolutionPhase::AwaitingUpgradeTarget);
        assert!(next.shop_selection_pending());
        assert_eq!(next.resolution.upgrade_budget(), Some(2));
        assert_eq!(next.player.trash_pile.len(), 1);
        assert!(next.upgrade_options().iter().all(|c| c.gold_cost() <= 2));

        let diamond = next.shop.iter().find(|c| c.template_id() == standard::DIAMOND).unwrap().id;
        assert!(matches!(
            try_pick_upgrade(&next, diamond),
            Err(Rejection::OverBudget { cost: 5, budget: 2, .. })
        ));

        let rummage = next.shop.iter().find(|c| c.template_id() == standard::RUMMAGE).unwrap().id;
        let shop_before = next.shop.len();
        let done = try_pick_upgrade(&next, rummage).unwrap();

        assert!(done.resolution.is_idle());
        assert_eq!(done.shop.len(), shop_before - 1);
        assert_eq!(done.player.gold, 0);
        assert_eq!(done.player.buys_remaining, 1);
        assert!(done.player.discard_pile.iter().any(|c| c.id == rummage));
        assert_eq!(done.player.discard_pile.back().unwrap().template_id(), standard::REFORGE);
    }

    #[test]
    fn test_upgrade_forfeit_and_cancel() {
        let game = game_with_hand(&[standard::REFORGE, standard::PUNCH]);
        let punch = hand_id(&game, standard::PUNCH);
        let upgrading = finish_action(&select_card(&play_card(&game, hand_id(&game, standard::REFORGE)), punch));

        assert_eq!(try_cancel_action(&upgrading), Err(Rejection::UpgradePending));

        let forfeited = finish_action(&upgrading);
        assert!(forfeited.resolution.is_idle());
        assert_eq!(forfeited.shop.len(), upgrading.shop.len());
        assert_eq!(forfeited.player.discard_pile.len(), 1);
    }

    #[test]
    fn test_upgrade_skipped_without_affordable_shop_card() {
        let mut game = game_with_hand(&[standard::REFORGE, standard::PUNCH]);
        game.shop.retain(|c| c.gold_cost() > 2);
        let punch = hand_id(&game, standard::PUNCH);

        let next = finish_action(&select_card(&play_card(&game, hand_id(&game, standard::REFORGE)), punch));

        assert!(next.resolution.is_idle());
        assert_eq!(next.player.trash_pile.len(), 1);
    }

    #[test]
    fn test_upgrade_without_trash_is_skipped() {
        let game = game_with_hand(&[standard::REFORGE]);
        let next = finish_action(&play_card(&game, hand_id(&game, standard::REFORGE)));
        assert!(next.resolution.is_idle());
    }

    #[test]
    fn test_lethal_damage_finishes_card_then_freezes() {
        let mut game = game_with_hand(&[standard::STAB, standard::PUNCH]);
        game.enemy.health = 1;

        let next = play_card(&game, hand_id(&game, standard::STAB));

        assert!(next.is_over);
        assert_eq!(next.winner, Some(Winner::Player));
        assert!(next.resolution.is_idle());
        assert_eq!(try_play_card(&next, hand_id(&next, standard::PUNCH)), Err(Rejection::GameOver));
    }
}
