//! Card instance identification.
//!
//! Every physical card in a game (starter deck, shop stock, bought copies)
//! carries a unique `CardInstanceId`. Two Coppers are two entities with
//! independent lifecycles even though they share a template.
//!
//! ## Allocation
//!
//! Ids are handed out sequentially by the snapshot that owns the game, so a
//! game built from the same seed always yields the same ids:
//!
//! ```
//! use rust_deckbuilder::core::{CardInstanceId, IdAllocator};
//!
//! let mut ids = IdAllocator::default();
//! let first = ids.alloc();
//! let second = ids.alloc();
//!
//! assert_eq!(first, CardInstanceId(0));
//! assert_ne!(first, second);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a single card copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardInstanceId(pub u32);

impl CardInstanceId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardInstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardInstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// Sequential id source carried inside a snapshot.
///
/// Cloning the allocator together with the snapshot keeps transitions pure:
/// the same input snapshot always allocates the same ids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Create an allocator whose first id is `start`.
    #[must_use]
    pub const fn starting_at(start: u32) -> Self {
        Self { next: start }
    }

    /// Allocate a new id.
    pub fn alloc(&mut self) -> CardInstanceId {
        let id = CardInstanceId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far (assuming a zero start).
    #[must_use]
    pub const fn allocated(&self) -> u32 {
        self.next
    }
}
