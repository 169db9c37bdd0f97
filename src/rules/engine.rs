//! Action dispatch for driving the engine from data.
//!
//! A presentation layer or a scripted player can express every operation as
//! a `GameAction`, apply it with [`apply_action`], and ask for the actions
//! currently accepted with [`legal_actions`].

use serde::{Deserialize, Serialize};

use crate::core::entity::CardInstanceId;
use crate::core::error::{settle, Rejection};
use crate::core::state::GameSnapshot;
use crate::resolution::{try_cancel_action, try_finish_action, try_play_card, try_select_card, ResolutionState};

use super::turn::{try_buy_card, try_deal_opening_hand, try_end_turn};

/// One player operation.
///
/// ## Example
///
/// ```
/// use rust_deckbuilder::rules::{apply_action, new_standard_game, GameAction};
///
/// let game = new_standard_game(3);
/// let game = apply_action(&game, &GameAction::DealOpeningHand);
/// assert_eq!(game.player.hand.len(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    DealOpeningHand,
    PlayCard(CardInstanceId),
    SelectCard(CardInstanceId),
    CancelAction,
    FinishAction,
    BuyCard(CardInstanceId),
    EndTurn,
}

/// Apply `action`, reporting why it was refused.
pub fn try_apply_action(snapshot: &GameSnapshot, action: &GameAction) -> Result<GameSnapshot, Rejection> {
    match *action {
        GameAction::DealOpeningHand => try_deal_opening_hand(snapshot),
        GameAction::PlayCard(card) => try_play_card(snapshot, card),
        GameAction::SelectCard(card) => try_select_card(snapshot, card),
        GameAction::CancelAction => try_cancel_action(snapshot),
        GameAction::FinishAction => try_finish_action(snapshot),
        GameAction::BuyCard(card) => try_buy_card(snapshot, card),
        GameAction::EndTurn => try_end_turn(snapshot),
    }
}

/// Apply `action`. Refused actions return an unchanged copy.
#[must_use]
pub fn apply_action(snapshot: &GameSnapshot, action: &GameAction) -> GameSnapshot {
    settle(snapshot, "apply_action", try_apply_action(snapshot, action))
}

/// Every action the engine would currently accept.
///
/// Empty once the game is over.
#[must_use]
pub fn legal_actions(snapshot: &GameSnapshot) -> Vec<GameAction> {
    if snapshot.is_over {
        return Vec::new();
    }

    let hand = snapshot.player.hand.iter().map(|c| c.id);
    let shop = snapshot.shop.iter().map(|c| c.id);

    let candidates: Vec<GameAction> = match &snapshot.resolution {
        ResolutionState::Idle => std::iter::once(GameAction::DealOpeningHand)
            .chain(hand.map(GameAction::PlayCard))
            .chain(shop.map(GameAction::BuyCard))
            .chain(std::iter::once(GameAction::EndTurn))
            .collect(),
        ResolutionState::AwaitingSelection { .. } => hand
            .map(GameAction::SelectCard)
            .chain([GameAction::FinishAction, GameAction::CancelAction])
            .collect(),
        ResolutionState::AwaitingUpgradeTarget { .. } => shop
            .map(GameAction::BuyCard)
            .chain(std::iter::once(GameAction::FinishAction))
            .collect(),
    };

    candidates
        .into_iter()
        .filter(|action| try_apply_action(snapshot, action).is_ok())
        .collect()
}
