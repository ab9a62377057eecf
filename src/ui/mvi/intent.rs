/// Marker trait for intents: key presses already translated into
/// something a reducer understands.
pub trait Intent: Send + 'static {}
