//! Player and enemy state.
//!
//! ## Player
//!
//! Per-turn resources plus the four card piles. Piles are `im::Vector`s so a
//! snapshot clone shares structure with its predecessor.
//!
//! ## Enemy
//!
//! A fixed damage counter: it has health and hits the player at the end of
//! every turn.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::entity::CardInstanceId;
use crate::cards::Card;

/// The player's resources and piles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub actions_remaining: i64,
    pub buys_remaining: i64,
    /// Clamped to 0 only by the end-of-turn lethality check.
    pub health: i64,
    pub gold: i64,
    pub cards_drawn_per_turn: usize,

    /// Cards playable this turn (insertion order).
    pub hand: Vector<Card>,
    /// Future hands; the front is the next draw.
    pub draw_pile: Vector<Card>,
    /// Spent cards, reshuffled into the draw pile when it empties.
    pub discard_pile: Vector<Card>,
    /// Permanently removed cards.
    pub trash_pile: Vector<Card>,
}

impl Player {
    /// Create a player with empty piles.
    #[must_use]
    pub fn new(health: i64, actions: i64, buys: i64, cards_drawn_per_turn: usize) -> Self {
        Self {
            actions_remaining: actions,
            buys_remaining: buys,
            health,
            gold: 0,
            cards_drawn_per_turn,
            hand: Vector::new(),
            draw_pile: Vector::new(),
            discard_pile: Vector::new(),
            trash_pile: Vector::new(),
        }
    }

    /// Find a card in hand.
    #[must_use]
    pub fn hand_card(&self, id: CardInstanceId) -> Option<&Card> {
        self.hand.iter().find(|c| c.id == id)
    }

    /// Remove a card from hand.
    ///
    /// Returns `None` if the card was not in hand.
    pub fn take_from_hand(&mut self, id: CardInstanceId) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c.id == id)?;
        Some(self.hand.remove(pos))
    }

    /// Cards in hand, draw, discard, and trash piles.
    pub fn pile_cards(&self) -> impl Iterator<Item = &Card> {
        self.hand
            .iter()
            .chain(self.draw_pile.iter())
            .chain(self.discard_pile.iter())
            .chain(self.trash_pile.iter())
    }

    /// Cards still in circulation (everything except the trash).
    #[must_use]
    pub fn live_card_count(&self) -> usize {
        self.hand.len() + self.draw_pile.len() + self.discard_pile.len()
    }
}

/// The enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub health: i64,
    /// Never decreases across rounds.
    pub damage_per_turn: i64,
}

impl Enemy {
    #[must_use]
    pub const fn new(health: i64, damage_per_turn: i64) -> Self {
        Self {
            health,
            damage_per_turn,
        }
    }

    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::{CardTemplate, TemplateId};
    use crate::effects::Effect;

    fn card(id: u32) -> Card {
        Card::new(
            CardInstanceId(id),
            Arc::new(CardTemplate::new(TemplateId::new(0), "Copper").with_effect(Effect::add_gold(1))),
        )
    }

    #[test]
    fn test_take_from_hand() {
        let mut player = Player::new(20, 1, 1, 5);
        player.hand.push_back(card(1));
        player.hand.push_back(card(2));

        let taken = player.take_from_hand(CardInstanceId(1)).unwrap();
        assert_eq!(taken.id, CardInstanceId(1));
        assert_eq!(player.hand.len(), 1);
        assert!(player.take_from_hand(CardInstanceId(99)).is_none());
        assert!(player.hand_card(CardInstanceId(2)).is_some());
    }

    #[test]
    fn test_pile_cards_spans_every_pile() {
        let mut player = Player::new(20, 1, 1, 5);
        player.hand.push_back(card(1));
        player.draw_pile.push_back(card(2));
        player.discard_pile.push_back(card(3));
        player.trash_pile.push_back(card(4));

        let ids: Vec<u32> = player.pile_cards().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(player.live_card_count(), 3);
    }

    #[test]
    fn test_enemy_defeated() {
        assert!(!Enemy::new(1, 1).is_defeated());
        assert!(Enemy::new(0, 1).is_defeated());
        assert!(Enemy::new(-3, 1).is_defeated());
    }
}
