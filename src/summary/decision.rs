use crate::resolve::values::is_empty;

/// Status text rendered for a deleted field.
pub const DELETED_TEXT: &str = "Apagado";

/// What the summary panel shows for one field. Derived on every recompute,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayDecision {
    Hidden,
    ShowDeleted,
    ShowNewValue(String),
}

impl DisplayDecision {
    pub fn is_hidden(&self) -> bool {
        matches!(self, DisplayDecision::Hidden)
    }
}

/// Reconcile the three per-field signals into one display decision.
///
/// The delete flag wins outright; a new value shows only when it is
/// non-empty and differs from the baseline.
pub fn decide(current: &str, original: &str, deleted: bool) -> DisplayDecision {
    if deleted {
        return DisplayDecision::ShowDeleted;
    }
    if !is_empty(current) && current != original {
        return DisplayDecision::ShowNewValue(current.to_string());
    }
    DisplayDecision::Hidden
}
