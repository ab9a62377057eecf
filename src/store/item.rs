use std::fmt;

/// Identifier of a packing-list entry.
///
/// Issued by [`ItemListStore`](super::ItemListStore) from a monotonic counter,
/// so an id is never handed out twice within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single thing to bring on the trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: u32,
    pub packed: bool,
}

impl Item {
    /// Display label, e.g. `"2 Passports"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.quantity, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_puts_quantity_first() {
        let item = Item {
            id: ItemId::new(1),
            description: "Socks".to_string(),
            quantity: 12,
            packed: false,
        };
        assert_eq!(item.label(), "12 Socks");
    }

    #[test]
    fn id_display() {
        assert_eq!(ItemId::new(7).to_string(), "#7");
        assert_eq!(ItemId::new(7).get(), 7);
    }
}
