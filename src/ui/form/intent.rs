use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    Insert(char),
    Backspace,
    /// Step the quantity up, wrapping from the maximum back to 1.
    IncreaseQuantity,
    /// Step the quantity down, wrapping from 1 to the maximum.
    DecreaseQuantity,
    /// Clear the description and restore the default quantity.
    Reset,
}

impl Intent for FormIntent {}
