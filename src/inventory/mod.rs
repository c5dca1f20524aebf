//! Inventory - which catalog items a user owns
//!
//! Ownership only grows: there is no sell-back. Free catalog items are
//! owned by everyone without appearing in the purchased set, so the
//! purchased set stays an exact mirror of what the remote profile stores.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::core::error::{EngineError, Result};
use crate::ledger::Wallet;

/// Outcome of a purchase attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Item bought; the cost was debited from the wallet
    Purchased { cost: u32 },
    /// Item was already owned (or free); nothing was charged
    AlreadyOwned,
}

/// The set of items a user has purchased
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    owned: AHashSet<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore an inventory from a stored set of item ids
    pub fn from_owned(ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            owned: ids.into_iter().collect(),
        }
    }

    /// Whether the user owns an item. Free items are owned by everyone;
    /// ids not in the catalog are owned by no one.
    pub fn owns(&self, catalog: &Catalog, item_id: &str) -> bool {
        if self.owned.contains(item_id) {
            return true;
        }
        catalog.get(item_id).is_some_and(|item| item.free)
    }

    /// Attempt to buy an item.
    ///
    /// Already-owned and free items are an idempotent no-op success;
    /// an unaffordable item is rejected with the wallet untouched.
    pub fn purchase(
        &mut self,
        catalog: &Catalog,
        wallet: &mut Wallet,
        item_id: &str,
    ) -> Result<PurchaseOutcome> {
        let item = catalog.require(item_id)?;

        if item.free || self.owned.contains(item_id) {
            return Ok(PurchaseOutcome::AlreadyOwned);
        }

        if !wallet.debit(item.cost) {
            return Err(EngineError::InsufficientFunds {
                cost: item.cost,
                balance: wallet.balance(),
            });
        }

        self.owned.insert(item_id.to_string());
        Ok(PurchaseOutcome::Purchased { cost: item.cost })
    }

    /// Ids of purchased items, sorted for deterministic payloads
    pub fn purchased_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.owned.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.owned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_then_owns() {
        let catalog = Catalog::with_defaults();
        let mut wallet = Wallet::new(150);
        let mut inventory = Inventory::new();

        assert!(!inventory.owns(&catalog, "clothes2"));
        let outcome = inventory
            .purchase(&catalog, &mut wallet, "clothes2")
            .unwrap();
        assert_eq!(outcome, PurchaseOutcome::Purchased { cost: 50 });
        assert_eq!(wallet.balance(), 100);
        assert!(inventory.owns(&catalog, "clothes2"));
    }

    #[test]
    fn test_insufficient_funds_leaves_state_unchanged() {
        let catalog = Catalog::with_defaults();
        let mut wallet = Wallet::new(30);
        let mut inventory = Inventory::new();

        let err = inventory
            .purchase(&catalog, &mut wallet, "acc4")
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::InsufficientFunds {
                cost: 80,
                balance: 30
            }
        );
        assert_eq!(wallet.balance(), 30);
        assert!(!inventory.owns(&catalog, "acc4"));
    }

    #[test]
    fn test_repurchase_is_free_noop() {
        let catalog = Catalog::with_defaults();
        let mut wallet = Wallet::new(150);
        let mut inventory = Inventory::new();

        inventory
            .purchase(&catalog, &mut wallet, "mouth2")
            .unwrap();
        let balance = wallet.balance();

        let outcome = inventory.purchase(&catalog, &mut wallet, "mouth2").unwrap();
        assert_eq!(outcome, PurchaseOutcome::AlreadyOwned);
        assert_eq!(wallet.balance(), balance);
    }

    #[test]
    fn test_free_items_owned_and_never_charged() {
        let catalog = Catalog::with_defaults();
        let mut wallet = Wallet::new(150);
        let mut inventory = Inventory::new();

        assert!(inventory.owns(&catalog, "skin4"));
        let outcome = inventory.purchase(&catalog, &mut wallet, "skin4").unwrap();
        assert_eq!(outcome, PurchaseOutcome::AlreadyOwned);
        assert_eq!(wallet.balance(), 150);
        // Free items never enter the purchased set
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_unknown_item_is_error() {
        let catalog = Catalog::with_defaults();
        let mut wallet = Wallet::new(150);
        let mut inventory = Inventory::new();

        assert_eq!(
            inventory.purchase(&catalog, &mut wallet, "ghost"),
            Err(EngineError::UnknownItem("ghost".into()))
        );
        assert!(!inventory.owns(&catalog, "ghost"));
    }
}
