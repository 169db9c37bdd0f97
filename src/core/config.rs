//! Game configuration.
//!
//! Games configure the engine at startup with a `GameConfig`:
//! - Starting health for both sides and the enemy's base damage
//! - Difficulty scaling (how often enemy damage grows, and by how much)
//! - Per-turn resources and hand size
//! - Starter deck and shop composition (by template)
//!
//! Defaults reproduce the standard game.

use serde::{Deserialize, Serialize};

use crate::cards::standard;
use crate::cards::TemplateId;

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use rust_deckbuilder::core::GameConfig;
///
/// let config = GameConfig::default()
///     .with_enemy_health(40)
///     .with_cards_drawn_per_turn(6);
///
/// assert_eq!(config.enemy_health, 40);
/// assert_eq!(config.damage_scaling_interval, 5);
/// assert_eq!(config.starter_deck_size(), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player health at game start.
    pub player_health: i64,

    /// Enemy health at game start.
    pub enemy_health: i64,

    /// Enemy damage dealt at the end of round 1.
    pub enemy_damage_per_turn: i64,

    /// Enemy damage grows on rounds divisible by this. 0 disables scaling.
    pub damage_scaling_interval: u32,

    /// Amount enemy damage grows by.
    pub damage_scaling_step: i64,

    /// Hand size drawn at the start of each turn.
    pub cards_drawn_per_turn: usize,

    /// Actions available at the start of each turn.
    pub actions_per_turn: i64,

    /// Buys available at the start of each turn.
    pub buys_per_turn: i64,

    /// Starter deck as (template, copies).
    pub starter_deck: Vec<(TemplateId, usize)>,

    /// Shop stock as (template, copies).
    pub shop_stock: Vec<(TemplateId, usize)>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_health: 20,
            enemy_health: 20,
            enemy_damage_per_turn: 1,
            damage_scaling_interval: 5,
            damage_scaling_step: 1,
            cards_drawn_per_turn: 5,
            actions_per_turn: 1,
            buys_per_turn: 1,
            starter_deck: vec![(standard::COPPER, 7), (standard::PUNCH, 3)],
            shop_stock: standard::SHOP_TEMPLATES.iter().map(|&id| (id, 10)).collect(),
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_player_health(mut self, health: i64) -> Self {
        self.player_health = health;
        self
    }

    #[must_use]
    pub fn with_enemy_health(mut self, health: i64) -> Self {
        self.enemy_health = health;
        self
    }

    #[must_use]
    pub fn with_enemy_damage(mut self, damage: i64) -> Self {
        self.enemy_damage_per_turn = damage;
        self
    }

    /// Set difficulty scaling. An interval of 0 disables it.
    #[must_use]
    pub fn with_damage_scaling(mut self, interval: u32, step: i64) -> Self {
        self.damage_scaling_interval = interval;
        self.damage_scaling_step = step;
        self
    }

    #[must_use]
    pub fn with_cards_drawn_per_turn(mut self, count: usize) -> Self {
        self.cards_drawn_per_turn = count;
        self
    }

    /// Set per-turn actions and buys.
    #[must_use]
    pub fn with_turn_resources(mut self, actions: i64, buys: i64) -> Self {
        self.actions_per_turn = actions;
        self.buys_per_turn = buys;
        self
    }

    /// Replace the starter deck.
    #[must_use]
    pub fn with_starter_deck(mut self, deck: Vec<(TemplateId, usize)>) -> Self {
        self.starter_deck = deck;
        self
    }

    /// Replace the shop stock.
    #[must_use]
    pub fn with_shop_stock(mut self, stock: Vec<(TemplateId, usize)>) -> Self {
        self.shop_stock = stock;
        self
    }

    /// Total cards in the starter deck.
    #[must_use]
    pub fn starter_deck_size(&self) -> usize {
        self.starter_deck.iter().map(|(_, n)| n).sum()
    }

    /// Does enemy damage grow at the end of `round`?
    #[must_use]
    pub fn scales_after_round(&self, round: u32) -> bool {
        self.damage_scaling_interval != 0 && round % self.damage_scaling_interval == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.player_health, 20);
        assert_eq!(config.enemy_health, 20);
        assert_eq!(config.enemy_damage_per_turn, 1);
        assert_eq!(config.cards_drawn_per_turn, 5);
        assert_eq!(config.starter_deck_size(), 10);
        assert_eq!(config.shop_stock.len(), standard::SHOP_TEMPLATES.len());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_player_health(5)
            .with_enemy_damage(3)
            .with_damage_scaling(2, 4)
            .with_turn_resources(2, 3)
            .with_starter_deck(vec![(standard::PUNCH, 2)])
            .with_shop_stock(vec![]);

        assert_eq!(config.player_health, 5);
        assert_eq!(config.enemy_damage_per_turn, 3);
        assert_eq!(config.damage_scaling_step, 4);
        assert_eq!(config.actions_per_turn, 2);
        assert_eq!(config.buys_per_turn, 3);
        assert_eq!(config.starter_deck_size(), 2);
        assert!(config.shop_stock.is_empty());
    }

    #[test]
    fn test_scaling_rounds() {
        let config = GameConfig::default();

        assert!(!config.scales_after_round(1));
        assert!(!config.scales_after_round(4));
        assert!(config.scales_after_round(5));
        assert!(config.scales_after_round(10));
    }

    #[test]
    fn test_scaling_disabled() {
        let config = GameConfig::default().with_damage_scaling(0, 1);
        assert!(!config.scales_after_round(5));
        assert!(!config.scales_after_round(0));
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
