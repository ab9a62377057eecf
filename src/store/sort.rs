//! Presentation orderings for the packing list.
//!
//! Sorting never touches the stored order; every mode produces a fresh
//! vector of references. All orderings are stable.

use std::cmp::Ordering;
use std::fmt;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use serde::{Deserialize, Serialize};

use super::item::Item;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Insertion order.
    #[default]
    Input,
    /// Alphabetical by description.
    Description,
    /// Unpacked items first.
    Packed,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Input => "input",
            SortMode::Description => "description",
            SortMode::Packed => "packed",
        }
    }

    /// Human label shown in the list title.
    pub fn label(self) -> &'static str {
        match self {
            SortMode::Input => "Sort by input order",
            SortMode::Description => "Sort by description",
            SortMode::Packed => "Sort by packed status",
        }
    }

    /// Next mode in the UI cycle: input, description, packed, input...
    pub fn next(self) -> Self {
        match self {
            SortMode::Input => SortMode::Description,
            SortMode::Description => SortMode::Packed,
            SortMode::Packed => SortMode::Input,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order `items` for display without reordering the slice itself.
pub fn sorted_view(items: &[Item], mode: SortMode) -> Vec<&Item> {
    let mut view: Vec<&Item> = items.iter().collect();
    match mode {
        SortMode::Input => {}
        SortMode::Description => {
            let collation = Collation::root();
            view.sort_by(|a, b| collation.compare(&a.description, &b.description));
        }
        SortMode::Packed => view.sort_by_key(|item| item.packed),
    }
    view
}

/// Description ordering with the Unicode root collation.
///
/// Accents and case are secondary and tertiary differences, so "Écharpe"
/// sorts between "Dress" and "Fan", and lowercase precedes uppercase when
/// two strings differ only by case.
struct Collation {
    collator: Option<CollatorBorrowed<'static>>,
}

impl Collation {
    fn root() -> Self {
        let prefs = CollatorPreferences::default();
        let collator = match Collator::try_new(prefs, CollatorOptions::default()) {
            Ok(collator) => Some(collator),
            Err(err) => {
                tracing::warn!(error = %err, "Root collation unavailable, using code point order");
                None
            }
        };
        Self { collator }
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}
