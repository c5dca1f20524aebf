//! Cosmetic item catalog - static reference data for the avatar shop
//!
//! Items are defined once at startup, either from the built-in set or
//! from a TOML file, and never change for the life of the session.

pub mod definitions;
pub mod item;

pub use item::{CatalogItem, ItemCategory};

use ahash::AHashMap;
use serde::Deserialize;

use crate::core::error::{EngineError, Result};

/// Catalog of all purchasable items
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    index: AHashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the built-in item set
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for &(id, name, category, cost) in definitions::DEFAULT_ITEMS {
            catalog.push(CatalogItem {
                id: id.into(),
                name: name.into(),
                category,
                cost,
                free: cost == 0,
            });
        }
        catalog
    }

    fn push(&mut self, item: CatalogItem) {
        self.index.insert(item.id.clone(), self.items.len());
        self.items.push(item);
    }

    /// Add an item to the catalog. Ids must be unique.
    pub fn add(&mut self, item: CatalogItem) -> Result<()> {
        if self.index.contains_key(&item.id) {
            return Err(EngineError::CatalogLoad(format!(
                "duplicate item id: {}",
                item.id
            )));
        }
        self.push(item);
        Ok(())
    }

    /// Get an item by id
    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// Get an item by id, failing on unknown ids
    pub fn require(&self, id: &str) -> Result<&CatalogItem> {
        self.get(id)
            .ok_or_else(|| EngineError::UnknownItem(id.to_string()))
    }

    /// All items in a given slot
    pub fn in_category(&self, category: ItemCategory) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().filter(move |i| i.category == category)
    }

    /// All items
    pub fn all(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Load an item set from a TOML file
    pub fn load_from_toml(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::CatalogLoad(e.to_string()))?;
        Self::parse_toml(&content)
    }

    /// Parse an item set from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let data: TomlCatalog =
            toml::from_str(content).map_err(|e| EngineError::CatalogLoad(e.to_string()))?;

        let mut catalog = Self::new();
        for item in data.items {
            catalog.add(item.into_item())?;
        }
        Ok(catalog)
    }
}

/// TOML representation of a catalog file
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    items: Vec<TomlItem>,
}

/// TOML representation of a single item
#[derive(Debug, Deserialize)]
struct TomlItem {
    id: String,
    name: String,
    category: ItemCategory,
    cost: u32,
    /// Defaults to true for zero-cost items
    free: Option<bool>,
}

impl TomlItem {
    fn into_item(self) -> CatalogItem {
        let free = self.free.unwrap_or(self.cost == 0);
        CatalogItem {
            id: self.id,
            name: self.name,
            category: self.category,
            cost: self.cost,
            free,
        }
    }
}
