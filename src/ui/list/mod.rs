mod intent;
mod reducer;
mod state;

pub use intent::ListViewIntent;
pub use reducer::ListViewReducer;
pub use state::ListViewState;
