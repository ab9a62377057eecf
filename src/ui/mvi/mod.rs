//! Model-View-Intent (MVI) primitives for the terminal UI.
//!
//! ```text
//! Key ──→ Intent ──→ Reducer ──→ State ──→ render
//!  ↑                                         │
//!  └─────────────────────────────────────────┘
//! ```
//!
//! - **State**: everything a widget needs to draw itself
//! - **Intent**: what the user asked for
//! - **Reducer**: pure `(State, Intent) -> State`
//!
//! The packing list itself lives in [`ItemListStore`](crate::store::ItemListStore);
//! reducers only cover the transient UI state around it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
