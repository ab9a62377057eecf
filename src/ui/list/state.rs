use crate::store::SortMode;
use crate::ui::mvi::UiState;

/// How the list is presented: the active sort mode and the highlighted row.
///
/// `selected` indexes the sorted view, not the stored order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ListViewState {
    pub sort_mode: SortMode,
    pub selected: usize,
}

impl UiState for ListViewState {}

impl ListViewState {
    pub fn new(sort_mode: SortMode) -> Self {
        Self {
            sort_mode,
            selected: 0,
        }
    }
}
