use crate::store::SortMode;
use crate::ui::mvi::Intent;

/// `len` is the number of rows in the view when the intent was raised.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListViewIntent {
    CycleSort,
    SetSort(SortMode),
    SelectNext { len: usize },
    SelectPrev { len: usize },
    /// Pull the selection back inside the list after it shrank.
    Clamp { len: usize },
}

impl Intent for ListViewIntent {}
