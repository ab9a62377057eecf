//! "Clear the whole list?" confirmation.
//!
//! The store clears unconditionally; asking first is a UI concern.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_confirm_dialog;
pub use intent::ConfirmIntent;
pub use reducer::ConfirmReducer;
pub use state::ConfirmDialogState;
