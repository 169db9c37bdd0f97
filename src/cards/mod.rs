//! Card system: templates, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `TemplateId`: Identifier for a kind of card
//! - `CardTemplate`: Static card data (costs, effects, behaviour tags)
//! - `CardRule`: Closed set of card-specific behaviours
//! - `Card`: One physical copy with a unique id
//! - `CardCatalog`: Template lookup and instantiation
//!
//! The `standard` module ships the default card set.

pub mod definition;
pub mod instance;
pub mod registry;
pub mod standard;

pub use definition::{CardRule, CardTemplate, TemplateId};
pub use instance::Card;
pub use registry::CardCatalog;
