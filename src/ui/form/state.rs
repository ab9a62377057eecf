use crate::ui::mvi::UiState;

/// Add-item form: the description being typed and the selected quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub description: String,
    pub quantity: u32,
    /// Quantity restored after a successful submit.
    pub default_quantity: u32,
    /// Upper end of the quantity picker; the lower end is always 1.
    pub max_quantity: u32,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(1, 20)
    }
}

impl UiState for FormState {}

impl FormState {
    pub fn new(default_quantity: u32, max_quantity: u32) -> Self {
        let max_quantity = max_quantity.max(1);
        let default_quantity = default_quantity.clamp(1, max_quantity);
        Self {
            description: String::new(),
            quantity: default_quantity,
            default_quantity,
            max_quantity,
        }
    }
}
