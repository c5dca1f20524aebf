//! Built-in item set - the default avatar shop
//!
//! Reference data: four free skin tones, one free starter item per other
//! slot, and paid cosmetics priced 20-80 Glowbits. Accessories are the
//! only slot with no free option (the slot itself is optional).

use crate::catalog::item::ItemCategory;

/// (id, display name, slot, cost). Items with cost 0 are free.
pub(crate) const DEFAULT_ITEMS: &[(&str, &str, ItemCategory, u32)] = &[
    // Skin tones (all free)
    ("skin1", "Terang", ItemCategory::Skin, 0),
    ("skin2", "Medium", ItemCategory::Skin, 0),
    ("skin3", "Tan", ItemCategory::Skin, 0),
    ("skin4", "Gelap", ItemCategory::Skin, 0),
    // Hair styles
    ("hair1", "Pendek", ItemCategory::Hair, 0),
    ("hair2", "Bob", ItemCategory::Hair, 30),
    ("hair3", "Panjang", ItemCategory::Hair, 40),
    ("hair4", "Keriting", ItemCategory::Hair, 50),
    ("hair5", "Mohawk", ItemCategory::Hair, 60),
    ("hair6", "Pigtails", ItemCategory::Hair, 55),
    // Eyes
    ("eyes1", "Normal", ItemCategory::Eyes, 0),
    ("eyes2", "Bintang", ItemCategory::Eyes, 25),
    ("eyes3", "Hati", ItemCategory::Eyes, 30),
    ("eyes4", "Sparkle", ItemCategory::Eyes, 35),
    // Mouth
    ("mouth1", "Senyum", ItemCategory::Mouth, 0),
    ("mouth2", "Grin", ItemCategory::Mouth, 20),
    ("mouth3", "Tertawa", ItemCategory::Mouth, 25),
    ("mouth4", "Cute", ItemCategory::Mouth, 30),
    // Clothes
    ("clothes1", "T-Shirt", ItemCategory::Clothes, 0),
    ("clothes2", "Hoodie", ItemCategory::Clothes, 50),
    ("clothes3", "Kemeja", ItemCategory::Clothes, 60),
    ("clothes4", "Jaket", ItemCategory::Clothes, 70),
    ("clothes5", "Sweater", ItemCategory::Clothes, 65),
    // Accessories
    ("acc1", "Kacamata", ItemCategory::Accessory, 40),
    ("acc2", "Topi", ItemCategory::Accessory, 45),
    ("acc3", "Headphone", ItemCategory::Accessory, 55),
    ("acc4", "Crown", ItemCategory::Accessory, 80),
    ("acc5", "Bandana", ItemCategory::Accessory, 35),
    // Backgrounds
    ("bg1", "Default", ItemCategory::Background, 0),
    ("bg2", "Sunset", ItemCategory::Background, 50),
    ("bg3", "Ocean", ItemCategory::Background, 50),
    ("bg4", "Forest", ItemCategory::Background, 50),
    ("bg5", "Galaxy", ItemCategory::Background, 80),
];
