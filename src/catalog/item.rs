//! Cosmetic item types

use serde::{Deserialize, Serialize};

/// Avatar slot a cosmetic item occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemCategory {
    Skin,
    Hair,
    Eyes,
    Mouth,
    Clothes,
    Accessory,
    Background,
}

impl ItemCategory {
    /// All slots, in display order
    pub const ALL: [ItemCategory; 7] = [
        ItemCategory::Skin,
        ItemCategory::Hair,
        ItemCategory::Eyes,
        ItemCategory::Mouth,
        ItemCategory::Clothes,
        ItemCategory::Accessory,
        ItemCategory::Background,
    ];
}

/// A purchasable cosmetic item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique identifier
    pub id: String,
    /// Human-readable name shown in the shop
    pub name: String,
    /// Slot this item equips into
    pub category: ItemCategory,
    /// Price in Glowbits
    pub cost: u32,
    /// Free items are implicitly owned by every user and never charged
    pub free: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_kebab_case() {
        let json = serde_json::to_string(&ItemCategory::Background).unwrap();
        assert_eq!(json, "\"background\"");
        let back: ItemCategory = serde_json::from_str("\"accessory\"").unwrap();
        assert_eq!(back, ItemCategory::Accessory);
    }
}
