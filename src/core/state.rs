//! The game snapshot.
//!
//! ## GameSnapshot
//!
//! One value holds everything a transition needs:
//! - Player and enemy
//! - Round counter, shop stock, end-of-game flags
//! - The resolution state (active card, pending selection, upgrade pick)
//! - RNG and id allocator, so transitions stay pure
//!
//! Piles use `im` persistent vectors, so handing out a fresh snapshot per
//! transition costs O(1) plus the changed nodes.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::entity::{CardInstanceId, IdAllocator};
use super::player::{Enemy, Player};
use super::rng::GameRng;
use crate::cards::{Card, CardCatalog};
use crate::effects::Effect;
use crate::resolution::{ActiveCard, PendingSelection, ResolutionPhase, ResolutionState};
use crate::zones;

/// Who won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Enemy,
}

/// Complete game state at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub player: Player,
    pub enemy: Enemy,

    /// Starts at 1, incremented by every completed end of turn.
    pub round: u32,

    /// Purchasable copies.
    pub shop: Vector<Card>,

    pub is_over: bool,
    pub winner: Option<Winner>,

    /// Set by the first `deal_opening_hand`.
    #[serde(default)]
    pub opening_hand_dealt: bool,

    pub resolution: ResolutionState,

    pub config: Arc<GameConfig>,
    pub rng: GameRng,
    pub ids: IdAllocator,
}

impl GameSnapshot {
    /// Build a fresh game: shuffled starter deck, empty hand, full shop.
    ///
    /// Templates named in the config but missing from `catalog` are skipped.
    #[must_use]
    pub fn new(config: GameConfig, catalog: &CardCatalog, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let mut ids = IdAllocator::default();

        let starter: Vector<Card> = config
            .starter_deck
            .iter()
            .flat_map(|&(template, count)| catalog.instantiate_many(template, count, &mut ids))
            .collect();
        let shop: Vector<Card> = config
            .shop_stock
            .iter()
            .flat_map(|&(template, count)| catalog.instantiate_many(template, count, &mut ids))
            .collect();

        let mut player = Player::new(
            config.player_health,
            config.actions_per_turn,
            config.buys_per_turn,
            config.cards_drawn_per_turn,
        );
        player.draw_pile = zones::shuffle(&starter, &mut rng);

        Self {
            player,
            enemy: Enemy::new(config.enemy_health, config.enemy_damage_per_turn),
            round: 1,
            shop,
            is_over: false,
            winner: None,
            opening_hand_dealt: false,
            resolution: ResolutionState::Idle,
            config: Arc::new(config),
            rng,
            ids,
        }
    }

    /// Mark the game over.
    pub(crate) fn conclude(&mut self, winner: Winner) {
        if !self.is_over {
            log::info!("game over in round {}: {:?} wins", self.round, winner);
        }
        self.is_over = true;
        self.winner = Some(winner);
    }

    // === Resolution views ===

    #[must_use]
    pub fn phase(&self) -> ResolutionPhase {
        self.resolution.phase()
    }

    /// The card mid-resolution, if any.
    #[must_use]
    pub fn active_card(&self) -> Option<&Card> {
        self.resolution.active().map(|a| &a.card)
    }

    #[must_use]
    pub fn active_effect_index(&self) -> Option<usize> {
        self.resolution.active().map(|a| a.effect_index)
    }

    /// The effect waiting on input, if any.
    #[must_use]
    pub fn current_effect(&self) -> Option<&Effect> {
        self.resolution.active().and_then(ActiveCard::current_effect)
    }

    #[must_use]
    pub fn pending_selection(&self) -> Option<&PendingSelection> {
        self.resolution.selection()
    }

    /// Cards picked so far for the paused effect.
    #[must_use]
    pub fn selected_cards(&self) -> &[Card] {
        self.resolution
            .selection()
            .map_or(&[][..], |s| s.cards.as_slice())
    }

    /// Is the player being asked for input (hand selection or shop pick)?
    #[must_use]
    pub fn awaiting_input(&self) -> bool {
        !self.resolution.is_idle()
    }

    #[must_use]
    pub fn shop_selection_pending(&self) -> bool {
        self.phase() == ResolutionPhase::AwaitingUpgradeTarget
    }

    /// Shop cards affordable with the current upgrade budget.
    #[must_use]
    pub fn upgrade_options(&self) -> Vec<&Card> {
        match self.resolution.upgrade_budget() {
            Some(budget) => self.shop.iter().filter(|c| c.gold_cost() <= budget).collect(),
            None => Vec::new(),
        }
    }

    // === Ownership ===

    /// Every card the player owns, wherever it is.
    ///
    /// Each id appears exactly once: piles, active card, and pending
    /// selection partition the player's cards.
    #[must_use]
    pub fn owned_card_ids(&self) -> Vec<CardInstanceId> {
        let mut ids: Vec<CardInstanceId> = self.player.pile_cards().map(|c| c.id).collect();
        if let Some(active) = self.resolution.active() {
            ids.push(active.card.id);
        }
        ids.extend(self.selected_cards().iter().map(|c| c.id));
        ids
    }

    /// Owned cards plus shop stock.
    #[must_use]
    pub fn all_card_ids(&self) -> Vec<CardInstanceId> {
        let mut ids = self.owned_card_ids();
        ids.extend(self.shop.iter().map(|c| c.id));
        ids
    }

    /// Find a shop card.
    #[must_use]
    pub fn shop_card(&self, id: CardInstanceId) -> Option<&Card> {
        self.shop.iter().find(|c| c.id == id)
    }

    /// Remove a card from the shop.
    pub(crate) fn take_from_shop(&mut self, id: CardInstanceId) -> Option<Card> {
        let pos = self.shop.iter().position(|c| c.id == id)?;
        Some(self.shop.remove(pos))
    }
}
