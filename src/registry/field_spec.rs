use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical field key, e.g. `data__1` or `texto16__3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldKey(pub String);

impl FieldKey {
    pub fn new(key: impl Into<String>) -> Self {
        FieldKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FieldKey {
    fn from(s: &str) -> Self {
        FieldKey(s.to_string())
    }
}

/// Which widget backs the field's input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Date,
}

/// Per-field delete toggle wiring.
///
/// `section` is the server-side marker key (the hidden input appended on
/// delete is named `deleted_<section>`); `label` is the human label used in
/// the date overlay text ("Data <label> será apagada").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleSpec {
    pub toggle_id: String,
    pub overlay_id: String,
    pub section: String,
    pub label: String,
}

/// Immutable wiring for one tracked field: the input control plus its two
/// summary display nodes. Any of the referenced nodes may be absent from the
/// document at call time; absence degrades to a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub key: FieldKey,
    pub kind: FieldKind,
    pub input_id: String,
    pub summary_row_id: String,
    pub summary_value_id: String,
    pub toggle: Option<ToggleSpec>,
}

impl FieldSpec {
    /// Id of the companion node carrying the server-supplied baseline value.
    pub fn original_id(&self) -> String {
        format!("original_{}", self.key)
    }

    /// Name of the hidden marker input attached while this field is deleted.
    pub fn marker_name(&self) -> Option<String> {
        self.toggle.as_ref().map(|t| format!("deleted_{}", t.section))
    }
}
