use thiserror::Error;

/// Reasons an item is refused by [`ItemListStore::add`](super::ItemListStore::add).
///
/// Unknown ids on remove/toggle are not errors; those calls report `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Item description must not be empty")]
    EmptyDescription,

    #[error("Item quantity must be at least 1")]
    InvalidQuantity,
}
