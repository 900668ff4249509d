pub mod date;
pub mod text;

/// Class rendered on a toggle control while its field is in the Deleted
/// state. Presentation only; the state itself lives in FieldRuntimeState.
pub const TOGGLE_DISABLED_CLASS: &str = "disabled";
