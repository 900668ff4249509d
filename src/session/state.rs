/// Mutable per-field state, one instance per registered field, living for
/// the page lifetime. `deleted` is the single source of truth for the
/// delete-toggle; the `disabled` class on the toggle control is a pure
/// rendering of it and is never read back.
#[derive(Debug, Clone, Default)]
pub struct FieldRuntimeState {
    pub current_value: String,
    pub original_value: String,
    pub deleted: bool,
}

impl FieldRuntimeState {
    pub fn with_original(original: impl Into<String>) -> Self {
        FieldRuntimeState {
            current_value: String::new(),
            original_value: original.into(),
            deleted: false,
        }
    }
}
