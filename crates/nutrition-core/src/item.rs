use crate::id::ItemId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A concrete item: a catalog identity plus a sub-variant.
///
/// Variants disambiguate sub-types of a single item (a damaged tool, a
/// coloured block, an enchanted apple) and default to `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    pub item: ItemId,
    pub variant: u32,
}

impl ItemRef {
    /// Placeholder for an item that could not be resolved.
    pub const EMPTY: ItemRef = ItemRef {
        item: ItemId::NONE,
        variant: 0,
    };

    pub fn new(item: ItemId, variant: u32) -> Self {
        Self { item, variant }
    }

    /// Reference to the base variant of an item.
    pub fn base(item: ItemId) -> Self {
        Self::new(item, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }
}

impl Default for ItemRef {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("<empty>")
        } else {
            write!(f, "#{}:{}", self.item.0, self.variant)
        }
    }
}
