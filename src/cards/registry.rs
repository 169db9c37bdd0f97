//! Card catalog for template lookup and instantiation.
//!
//! The `CardCatalog` stores every template a game can create copies of.
//! It is consumed by game setup; snapshots never reference it afterwards
//! because each copy carries its own template handle.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::definition::{CardTemplate, TemplateId};
use super::instance::Card;
use crate::core::entity::IdAllocator;

/// Registry of card templates.
///
/// ## Example
///
/// ```
/// use rust_deckbuilder::cards::{CardCatalog, CardTemplate, TemplateId};
/// use rust_deckbuilder::core::IdAllocator;
/// use rust_deckbuilder::effects::Effect;
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(
///     CardTemplate::new(TemplateId::new(0), "Copper").with_effect(Effect::add_gold(1)),
/// );
///
/// let mut ids = IdAllocator::default();
/// let a = catalog.instantiate(TemplateId::new(0), &mut ids).unwrap();
/// let b = catalog.instantiate(TemplateId::new(0), &mut ids).unwrap();
/// assert_ne!(a.id, b.id);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    templates: FxHashMap<TemplateId, Arc<CardTemplate>>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template.
    ///
    /// Panics if the id is taken or the template has no effects or a
    /// negative action cost.
    pub fn register(&mut self, template: CardTemplate) {
        if self.templates.contains_key(&template.id) {
            panic!("Template with ID {:?} already registered", template.id);
        }
        if !template.is_valid() {
            panic!("Template {:?} ({}) is not playable", template.id, template.name);
        }
        self.templates.insert(template.id, Arc::new(template));
    }

    /// Get a template by ID.
    #[must_use]
    pub fn get(&self, id: TemplateId) -> Option<&Arc<CardTemplate>> {
        self.templates.get(&id)
    }

    /// Find a template by its display name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Arc<CardTemplate>> {
        self.templates.values().find(|t| t.name == name)
    }

    /// Check if a template ID is registered.
    #[must_use]
    pub fn contains(&self, id: TemplateId) -> bool {
        self.templates.contains_key(&id)
    }

    /// Get the number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate over all templates.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardTemplate>> {
        self.templates.values()
    }

    /// Create a new copy of a template with a fresh id.
    ///
    /// Returns `None` for unknown templates; no id is consumed in that case.
    pub fn instantiate(&self, id: TemplateId, ids: &mut IdAllocator) -> Option<Card> {
        let template = self.templates.get(&id)?;
        Some(Card::new(ids.alloc(), Arc::clone(template)))
    }

    /// Create `count` copies of a template.
    pub fn instantiate_many(&self, id: TemplateId, count: usize, ids: &mut IdAllocator) -> Vec<Card> {
        (0..count)
            .filter_map(|_| self.instantiate(id, ids))
            .collect()
    }
}
