//! Rejection reasons for player operations.
//!
//! Operations never fail from the caller's point of view: a rejected call
//! returns the snapshot unchanged. The `try_*` variants expose *why* a call
//! was rejected so that a presentation layer can explain it.

use thiserror::Error;

use super::entity::CardInstanceId;
use super::state::GameSnapshot;

/// Broad category of a rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// Acting while another card or sub-flow is active, or after game end.
    IllegalState,
    /// Not enough actions, gold, or buys.
    InsufficientResource,
    /// Card id absent from the expected collection.
    NotFound,
    /// Selection violates a card restriction, a cap, or a budget.
    IneligibleTarget,
}

/// Why an operation left the snapshot unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the game is over")]
    GameOver,

    #[error("another card is still resolving")]
    CardActive,

    #[error("no card is resolving")]
    NoActiveCard,

    #[error("no selection is pending")]
    NotAwaitingSelection,

    #[error("the upgrade pick must be resolved first")]
    UpgradePending,

    #[error("the opening hand has already been dealt")]
    AlreadyDealt,

    #[error("need {required} actions, have {available}")]
    NotEnoughActions { required: i64, available: i64 },

    #[error("need {required} gold, have {available}")]
    NotEnoughGold { required: i64, available: i64 },

    #[error("no buys remaining")]
    NoBuysRemaining,

    #[error("{0} is not in hand")]
    NotInHand(CardInstanceId),

    #[error("{0} is not in the shop")]
    NotInShop(CardInstanceId),

    #[error("{0} cannot be selected by the active card")]
    IneligibleSelection(CardInstanceId),

    #[error("at most {max} cards may be selected")]
    SelectionCapReached { max: usize },

    #[error("{card} costs {cost}, upgrade budget is {budget}")]
    OverBudget {
        card: CardInstanceId,
        cost: i64,
        budget: i64,
    },
}

impl Rejection {
    /// The rejection category.
    #[must_use]
    pub fn kind(&self) -> RejectionKind {
        match self {
            Rejection::GameOver
            | Rejection::CardActive
            | Rejection::NoActiveCard
            | Rejection::NotAwaitingSelection
            | Rejection::UpgradePending
            | Rejection::AlreadyDealt => RejectionKind::IllegalState,
            Rejection::NotEnoughActions { .. }
            | Rejection::NotEnoughGold { .. }
            | Rejection::NoBuysRemaining => RejectionKind::InsufficientResource,
            Rejection::NotInHand(_) | Rejection::NotInShop(_) => RejectionKind::NotFound,
            Rejection::IneligibleSelection(_)
            | Rejection::SelectionCapReached { .. }
            | Rejection::OverBudget { .. } => RejectionKind::IneligibleTarget,
        }
    }
}

/// Collapse a `try_*` result into a total transition.
///
/// Rejections are logged and yield an unchanged copy of `snapshot`.
pub(crate) fn settle(
    snapshot: &GameSnapshot,
    operation: &str,
    result: Result<GameSnapshot, Rejection>,
) -> GameSnapshot {
    result.unwrap_or_else(|rejection| {
        log::debug!("{operation} rejected ({:?}): {rejection}", rejection.kind());
        snapshot.clone()
    })
}

/// Reject every transition once the game has ended.
pub(crate) fn ensure_live(snapshot: &GameSnapshot) -> Result<(), Rejection> {
    if snapshot.is_over {
        Err(Rejection::GameOver)
    } else {
        Ok(())
    }
}
