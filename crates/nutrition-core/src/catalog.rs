//! The item catalog seam.
//!
//! Compilation only needs two things from the host: resolving a
//! `namespace:name` identifier to an item, and deciding whether a concrete
//! item is edible. [`ItemCatalog`] and [`FoodPredicate`] express those.
//! [`Catalog`] is an in-memory implementation of both, built once through
//! [`CatalogBuilder`] and frozen afterwards.

use crate::id::ItemId;
use crate::item::ItemRef;
use std::collections::HashMap;

/// Resolves item identifiers to catalog identities.
pub trait ItemCatalog {
    fn resolve(&self, identifier: &str) -> Option<ItemId>;
}

/// Decides whether a concrete item is a valid food.
pub trait FoodPredicate {
    fn is_valid_food(&self, item: &ItemRef) -> bool;
}

impl<F> FoodPredicate for F
where
    F: Fn(&ItemRef) -> bool,
{
    fn is_valid_food(&self, item: &ItemRef) -> bool {
        self(item)
    }
}

/// Which variants of an item may be eaten.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Edibility {
    #[default]
    Inedible,
    AnyVariant,
    Variants(Vec<u32>),
}

impl Edibility {
    pub fn allows(&self, variant: u32) -> bool {
        match self {
            Edibility::Inedible => false,
            Edibility::AnyVariant => true,
            Edibility::Variants(vs) => vs.contains(&variant),
        }
    }
}

/// An item type definition in the catalog.
#[derive(Debug, Clone)]
pub struct ItemDef {
    pub identifier: String,
    pub edibility: Edibility,
}

/// Builder for constructing an immutable [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    items: Vec<ItemDef>,
    identifier_to_id: HashMap<String, ItemId>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item. Returns its ID.
    pub fn register_item(
        &mut self,
        identifier: &str,
        edibility: Edibility,
    ) -> Result<ItemId, CatalogError> {
        if self.identifier_to_id.contains_key(identifier) {
            return Err(CatalogError::Duplicate(identifier.to_string()));
        }
        if !is_namespaced(identifier) {
            return Err(CatalogError::MalformedIdentifier(identifier.to_string()));
        }
        let id = next_item_id(self.items.len())?;
        self.items.push(ItemDef {
            identifier: identifier.to_string(),
            edibility,
        });
        self.identifier_to_id.insert(identifier.to_string(), id);
        Ok(id)
    }

    /// Register an item that is edible in every variant.
    pub fn register_food(&mut self, identifier: &str) -> Result<ItemId, CatalogError> {
        self.register_item(identifier, Edibility::AnyVariant)
    }

    /// Change the edibility of an already registered item.
    pub fn set_edibility(
        &mut self,
        identifier: &str,
        edibility: Edibility,
    ) -> Result<(), CatalogError> {
        let id = self
            .identifier_to_id
            .get(identifier)
            .ok_or_else(|| CatalogError::NotFound(identifier.to_string()))?;
        self.items[id.0 as usize].edibility = edibility;
        Ok(())
    }

    pub fn item_id(&self, identifier: &str) -> Option<ItemId> {
        self.identifier_to_id.get(identifier).copied()
    }

    pub fn build(self) -> Catalog {
        Catalog {
            items: self.items,
            identifier_to_id: self.identifier_to_id,
        }
    }
}

/// Immutable item catalog. Frozen after [`CatalogBuilder::build`].
#[derive(Debug, Default)]
pub struct Catalog {
    items: Vec<ItemDef>,
    identifier_to_id: HashMap<String, ItemId>,
}

impl Catalog {
    pub fn get(&self, id: ItemId) -> Option<&ItemDef> {
        self.items.get(id.0 as usize)
    }

    pub fn item_id(&self, identifier: &str) -> Option<ItemId> {
        self.identifier_to_id.get(identifier).copied()
    }

    pub fn identifier(&self, id: ItemId) -> Option<&str> {
        self.get(id).map(|def| def.identifier.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemCatalog for Catalog {
    fn resolve(&self, identifier: &str) -> Option<ItemId> {
        self.item_id(identifier)
    }
}

impl FoodPredicate for Catalog {
    fn is_valid_food(&self, item: &ItemRef) -> bool {
        self.get(item.item)
            .map(|def| def.edibility.allows(item.variant))
            .unwrap_or(false)
    }
}

/// The id for the item registered after `count` others. `ItemId::NONE` is
/// reserved for empty references and never handed out.
fn next_item_id(count: usize) -> Result<ItemId, CatalogError> {
    u32::try_from(count)
        .ok()
        .map(ItemId)
        .filter(|id| !id.is_none())
        .ok_or(CatalogError::Full)
}

fn is_namespaced(identifier: &str) -> bool {
    match identifier.split_once(':') {
        Some((ns, name)) => !ns.is_empty() && !name.is_empty() && !name.contains(':'),
        None => false,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("item already registered: {0}")]
    Duplicate(String),
    #[error("item identifier must be `namespace:name`: {0}")]
    MalformedIdentifier(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("catalog has no item ids left")]
    Full,
}
