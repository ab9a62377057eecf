/// Marker trait for UI state objects.
///
/// States are cloned into reducers and compared in tests, and `Default`
/// lets [`App`](crate::ui::app::App) move them out with `std::mem::take`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
