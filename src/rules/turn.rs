//! Turn controller: game setup, buying, and ending the turn.

use crate::cards::{standard, CardCatalog};
use crate::core::config::GameConfig;
use crate::core::entity::CardInstanceId;
use crate::core::error::{ensure_live, settle, Rejection};
use crate::core::state::{GameSnapshot, Winner};
use crate::resolution::{try_pick_upgrade, ResolutionState};
use crate::zones;

/// Start a game from `config` and `catalog`.
///
/// The draw pile is shuffled with `seed`. The hand starts empty; see
/// [`deal_opening_hand`].
#[must_use]
pub fn new_game(config: GameConfig, catalog: &CardCatalog, seed: u64) -> GameSnapshot {
    let snapshot = GameSnapshot::new(config, catalog, seed);
    log::info!(
        "new game (seed {seed}): {} cards in deck, {} in shop",
        snapshot.player.draw_pile.len(),
        snapshot.shop.len()
    );
    snapshot
}

/// Start a game with the default configuration and standard cards.
#[must_use]
pub fn new_standard_game(seed: u64) -> GameSnapshot {
    new_game(GameConfig::default(), &standard::catalog(), seed)
}

/// Draw the first hand of the game.
pub fn try_deal_opening_hand(snapshot: &GameSnapshot) -> Result<GameSnapshot, Rejection> {
    ensure_live(snapshot)?;
    if !snapshot.resolution.is_idle() {
        return Err(Rejection::CardActive);
    }
    if snapshot.opening_hand_dealt || snapshot.round != 1 || !snapshot.player.hand.is_empty() {
        return Err(Rejection::AlreadyDealt);
    }

    let mut next = snapshot.clone();
    next.opening_hand_dealt = true;
    let count = next.player.cards_drawn_per_turn;
    zones::draw_n(&mut next.player, count, &mut next.rng);
    Ok(next)
}

#[must_use]
pub fn deal_opening_hand(snapshot: &GameSnapshot) -> GameSnapshot {
    settle(snapshot, "deal_opening_hand", try_deal_opening_hand(snapshot))
}

/// Buy a shop card, or pick the upgrade target while one is pending.
///
/// A normal purchase needs an idle state, enough gold, and a buy. The card
/// goes to the discard pile.
pub fn try_buy_card(snapshot: &GameSnapshot, card: CardInstanceId) -> Result<GameSnapshot, Rejection> {
    ensure_live(snapshot)?;
    match snapshot.resolution {
        ResolutionState::Idle => {}
        ResolutionState::AwaitingUpgradeTarget { .. } => return try_pick_upgrade(snapshot, card),
        ResolutionState::AwaitingSelection { .. } => return Err(Rejection::CardActive),
    }

    let cost = snapshot.shop_card(card).ok_or(Rejection::NotInShop(card))?.gold_cost();
    let gold = snapshot.player.gold;
    if gold < cost {
        return Err(Rejection::NotEnoughGold {
            required: cost,
            available: gold,
        });
    }
    if snapshot.player.buys_remaining < 1 {
        return Err(Rejection::NoBuysRemaining);
    }

    let mut next = snapshot.clone();
    let bought = next.take_from_shop(card).ok_or(Rejection::NotInShop(card))?;
    next.player.gold -= cost;
    next.player.buys_remaining -= 1;
    log::debug!("bought {bought} for {cost} gold");
    next.player.discard_pile.push_back(bought);
    Ok(next)
}

#[must_use]
pub fn buy_card(snapshot: &GameSnapshot, card: CardInstanceId) -> GameSnapshot {
    settle(snapshot, "buy_card", try_buy_card(snapshot, card))
}

/// End the turn: the enemy attacks, then the next hand is drawn.
///
/// Enemy damage grows after every round divisible by the configured
/// scaling interval.
pub fn try_end_turn(snapshot: &GameSnapshot) -> Result<GameSnapshot, Rejection> {
    ensure_live(snapshot)?;
    if !snapshot.resolution.is_idle() {
        return Err(Rejection::CardActive);
    }

    let mut next = snapshot.clone();
    next.player.health -= next.enemy.damage_per_turn;
    log::debug!(
        "round {}: enemy hits for {}, player at {}",
        next.round,
        next.enemy.damage_per_turn,
        next.player.health
    );
    if next.player.health <= 0 {
        next.player.health = 0;
        next.conclude(Winner::Enemy);
        return Ok(next);
    }

    let hand = std::mem::take(&mut next.player.hand);
    next.player.discard_pile.append(hand);
    next.player.actions_remaining = next.config.actions_per_turn;
    next.player.buys_remaining = next.config.buys_per_turn;
    next.player.gold = 0;
    let count = next.player.cards_drawn_per_turn;
    zones::draw_n(&mut next.player, count, &mut next.rng);

    if next.config.scales_after_round(next.round) {
        next.enemy.damage_per_turn += next.config.damage_scaling_step;
        log::debug!("enemy damage rises to {}", next.enemy.damage_per_turn);
    }
    next.round += 1;
    Ok(next)
}

#[must_use]
pub fn end_turn(snapshot: &GameSnapshot) -> GameSnapshot {
    settle(snapshot, "end_turn", try_end_turn(snapshot))
}
