//! Avatar configurator - equipped cosmetics per slot
//!
//! Every slot except the accessory always holds exactly one item; the
//! accessory is zero-or-one. Only owned items may be equipped. The
//! configuration compares by value so callers can tell whether an
//! operation actually changed anything before mirroring it remotely.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ItemCategory};
use crate::core::error::{EngineError, Result};
use crate::inventory::Inventory;

/// Currently equipped item id per avatar slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarConfig {
    pub skin: String,
    pub hair: String,
    pub eyes: String,
    pub mouth: String,
    pub clothes: String,
    pub accessory: Option<String>,
    pub background: String,
}

impl Default for AvatarConfig {
    /// The free starter look every account begins with
    fn default() -> Self {
        Self {
            skin: "skin1".into(),
            hair: "hair1".into(),
            eyes: "eyes1".into(),
            mouth: "mouth1".into(),
            clothes: "clothes1".into(),
            accessory: None,
            background: "bg1".into(),
        }
    }
}

impl AvatarConfig {
    /// Equip an owned item into its slot.
    ///
    /// Fails with `NotOwned` for items the inventory does not own and
    /// `CategoryMismatch` when the item does not belong to `category`.
    pub fn equip(
        &mut self,
        catalog: &Catalog,
        inventory: &Inventory,
        category: ItemCategory,
        item_id: &str,
    ) -> Result<()> {
        let item = catalog.require(item_id)?;

        if item.category != category {
            return Err(EngineError::CategoryMismatch {
                item: item_id.to_string(),
                requested: category,
                actual: item.category,
            });
        }
        if !inventory.owns(catalog, item_id) {
            return Err(EngineError::NotOwned(item_id.to_string()));
        }

        match category {
            ItemCategory::Skin => self.skin = item_id.to_string(),
            ItemCategory::Hair => self.hair = item_id.to_string(),
            ItemCategory::Eyes => self.eyes = item_id.to_string(),
            ItemCategory::Mouth => self.mouth = item_id.to_string(),
            ItemCategory::Clothes => self.clothes = item_id.to_string(),
            ItemCategory::Accessory => self.accessory = Some(item_id.to_string()),
            ItemCategory::Background => self.background = item_id.to_string(),
        }
        Ok(())
    }

    /// Unequip the accessory. Always legal; the slot is optional.
    pub fn clear_accessory(&mut self) {
        self.accessory = None;
    }

    /// The item equipped in a slot, if any
    pub fn equipped(&self, category: ItemCategory) -> Option<&str> {
        match category {
            ItemCategory::Skin => Some(&self.skin),
            ItemCategory::Hair => Some(&self.hair),
            ItemCategory::Eyes => Some(&self.eyes),
            ItemCategory::Mouth => Some(&self.mouth),
            ItemCategory::Clothes => Some(&self.clothes),
            ItemCategory::Accessory => self.accessory.as_deref(),
            ItemCategory::Background => Some(&self.background),
        }
    }
}
