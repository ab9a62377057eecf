use super::item::Item;

/// Derived completion numbers for the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub packed: usize,
    /// `None` for an empty list: there is nothing to report a share of.
    pub percentage: Option<u8>,
}

impl Stats {
    pub fn from_items(items: &[Item]) -> Self {
        let total = items.len();
        let packed = items.iter().filter(|item| item.packed).count();
        Self {
            total,
            packed,
            percentage: packed_percentage(packed, total),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn is_complete(&self) -> bool {
        self.percentage == Some(100)
    }

    /// Footer sentence for the current numbers.
    pub fn summary(&self) -> String {
        let Some(percentage) = self.percentage else {
            return "Start the adventure, list down all your needs!".to_string();
        };
        if self.is_complete() {
            return "You got everything! Ready to go".to_string();
        }
        format!(
            "You have {} on your list, and you already packed {} ({}%).",
            count_noun(self.total),
            count_noun(self.packed),
            percentage
        )
    }
}

/// `round(packed / total * 100)`, halves rounding up.
///
/// Integer arithmetic keeps the result independent of float rounding:
/// `(200 * packed + total) / (2 * total)` is `floor(100 * packed / total + 0.5)`.
pub fn packed_percentage(packed: usize, total: usize) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let packed = packed.min(total) as u128;
    let total = total as u128;
    let rounded = (200 * packed + total) / (2 * total);
    Some(rounded as u8)
}

fn count_noun(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_percentage() {
        assert_eq!(packed_percentage(0, 0), None);
    }

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(packed_percentage(1, 3), Some(33));
        assert_eq!(packed_percentage(2, 3), Some(67));
        assert_eq!(packed_percentage(1, 2), Some(50));
    }

    #[test]
    fn halves_round_up() {
        // 12.5%
        assert_eq!(packed_percentage(1, 8), Some(13));
        // 87.5%
        assert_eq!(packed_percentage(7, 8), Some(88));
    }

    #[test]
    fn bounds() {
        assert_eq!(packed_percentage(0, 5), Some(0));
        assert_eq!(packed_percentage(5, 5), Some(100));
        // 199/200 = 99.5% rounds to 100
        assert_eq!(packed_percentage(199, 200), Some(100));
    }

    #[test]
    fn summary_messages() {
        let empty = Stats::default();
        assert_eq!(
            empty.summary(),
            "Start the adventure, list down all your needs!"
        );

        let done = Stats {
            total: 2,
            packed: 2,
            percentage: Some(100),
        };
        assert_eq!(done.summary(), "You got everything! Ready to go");

        let partial = Stats {
            total: 3,
            packed: 1,
            percentage: Some(33),
        };
        assert_eq!(
            partial.summary(),
            "You have 3 items on your list, and you already packed 1 item (33%)."
        );
    }
}
