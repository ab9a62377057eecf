//! In-memory packing list.
//!
//! [`ItemListStore`] keeps items in insertion order and separates commands
//! (`add`, `remove`, `toggle`, `clear`) from pure queries (`view`, `stats`).
//! Queries never reorder the stored items.

mod error;
mod item;
mod sort;
mod stats;

pub use error::StoreError;
pub use item::{Item, ItemId};
pub use sort::SortMode;
pub use stats::Stats;

use sort::sorted_view;

use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ItemListStore {
    items: Vec<Item>,
    next_id: u64,
}

impl Default for ItemListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemListStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new unpacked item.
    ///
    /// The description is trimmed; blank descriptions and a zero quantity
    /// are rejected without touching the list.
    pub fn add(&mut self, description: &str, quantity: u32) -> Result<Item, StoreError> {
        let description = description.trim();
        if description.is_empty() {
            debug!("Rejected item with empty description");
            return Err(StoreError::EmptyDescription);
        }
        if quantity == 0 {
            debug!(description, "Rejected item with zero quantity");
            return Err(StoreError::InvalidQuantity);
        }

        let item = Item {
            id: self.allocate_id(),
            description: description.to_string(),
            quantity,
            packed: false,
        };
        info!(id = %item.id, description = %item.description, quantity, "Item added");
        self.items.push(item.clone());
        Ok(item)
    }

    /// Remove the item with `id`. Returns `false` if no such item exists.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let Some(index) = self.position(id) else {
            debug!(id = %id, "Remove ignored, item not found");
            return false;
        };
        let removed = self.items.remove(index);
        debug!(id = %id, description = %removed.description, "Item removed");
        true
    }

    /// Flip the packed flag of `id`. Returns `false` if no such item exists.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            debug!(id = %id, "Toggle ignored, item not found");
            return false;
        };
        item.packed = !item.packed;
        debug!(id = %id, packed = item.packed, "Item toggled");
        true
    }

    /// Drop every item. Ids keep counting up afterwards.
    pub fn clear(&mut self) {
        info!(count = self.items.len(), "List cleared");
        self.items.clear();
    }

    pub fn view(&self, mode: SortMode) -> Vec<&Item> {
        sorted_view(&self.items, mode)
    }

    pub fn stats(&self) -> Stats {
        Stats::from_items(&self.items)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(view: &[&Item]) -> Vec<ItemId> {
        view.iter().map(|item| item.id).collect()
    }

    #[test]
    fn add_assigns_fresh_ids_and_defaults() {
        let mut store = ItemListStore::new();
        let a = store.add("Passport", 2).unwrap();
        let b = store.add("Socks", 12).unwrap();
        assert_ne!(a.id, b.id);
        assert!(!a.packed);
        assert_eq!(a.quantity, 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[1], b);
    }

    #[test]
    fn add_rejects_blank_description() {
        let mut store = ItemListStore::new();
        assert_eq!(store.add("", 1), Err(StoreError::EmptyDescription));
        assert_eq!(store.add("   \t", 3), Err(StoreError::EmptyDescription));
        assert!(store.is_empty());
    }

    #[test]
    fn add_rejects_zero_quantity() {
        let mut store = ItemListStore::new();
        assert_eq!(store.add("Towel", 0), Err(StoreError::InvalidQuantity));
        assert!(store.is_empty());
    }

    #[test]
    fn add_trims_description() {
        let mut store = ItemListStore::new();
        let item = store.add("  Sunscreen ", 1).unwrap();
        assert_eq!(item.description, "Sunscreen");
    }

    #[test]
    fn toggle_flips_and_flips_back() {
        let mut store = ItemListStore::new();
        let item = store.add("Hat", 1).unwrap();
        assert!(store.toggle(item.id));
        assert!(store.get(item.id).unwrap().packed);
        assert!(store.toggle(item.id));
        assert!(!store.get(item.id).unwrap().packed);
    }

    #[test]
    fn missing_ids_are_noops() {
        let mut store = ItemListStore::new();
        let item = store.add("Hat", 1).unwrap();
        let before = store.items().to_vec();
        let ghost = ItemId::new(999);
        assert!(!store.remove(ghost));
        assert!(!store.toggle(ghost));
        assert_eq!(store.items(), before.as_slice());
        assert!(store.remove(item.id));
        assert!(!store.remove(item.id));
    }

    #[test]
    fn clear_empties_but_keeps_counting() {
        let mut store = ItemListStore::new();
        let first = store.add("Map", 1).unwrap();
        store.clear();
        assert!(store.is_empty());
        let second = store.add("Map", 1).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn view_does_not_mutate_order() {
        let mut store = ItemListStore::new();
        let c = store.add("charger", 1).unwrap();
        let a = store.add("Adapter", 1).unwrap();
        let b = store.add("boots", 1).unwrap();
        store.toggle(c.id);

        assert_eq!(ids(&store.view(SortMode::Description)), vec![a.id, b.id, c.id]);
        assert_eq!(ids(&store.view(SortMode::Packed)), vec![a.id, b.id, c.id]);
        assert_eq!(ids(&store.view(SortMode::Input)), vec![c.id, a.id, b.id]);
    }

    #[test]
    fn stats_track_packing() {
        let mut store = ItemListStore::new();
        assert_eq!(store.stats().total, 0);
        assert_eq!(store.stats().percentage, None);

        let item = store.add("Camera", 1).unwrap();
        store.toggle(item.id);
        let stats = store.stats();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.packed, 1);
        assert_eq!(stats.percentage, Some(100));
    }
}
