use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ConfirmDialogState {
    #[default]
    Hidden,
    Visible {
        /// True when the "Delete all" button is highlighted, false for "Cancel".
        confirm_selected: bool,
    },
}

impl UiState for ConfirmDialogState {}

impl ConfirmDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn confirm_selected(&self) -> bool {
        matches!(
            self,
            Self::Visible {
                confirm_selected: true
            }
        )
    }
}
