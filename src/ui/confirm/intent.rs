use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfirmIntent {
    /// Show the dialog with "Cancel" highlighted.
    Open,
    Close,
    ToggleButton,
}

impl Intent for ConfirmIntent {}
