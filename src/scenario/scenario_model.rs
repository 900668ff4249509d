use serde::{Deserialize, Serialize};

use crate::registry::field_spec::FieldKind;

/// A scripted interaction against a fabricated readequação form. Authored
/// as YAML for human review; replayed through a fresh FormSession.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    /// Human-readable name for this scenario
    pub name: String,

    /// Field fixtures the form starts with
    #[serde(default)]
    pub fields: Vec<FieldFixture>,

    /// Ordered interaction steps
    pub steps: Vec<ScenarioStep>,
}

/// One field on the fabricated form. Ids follow the page's conventions
/// (`li_<key>`, `novo_<key>`, `del_<key>`, `aviso_<key>`); a field gets a
/// delete toggle only when both `section` and `label` are present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldFixture {
    pub key: String,
    pub kind: FieldKind,

    /// Server-supplied baseline, raw (may be the `""` or `None` marker)
    #[serde(default)]
    pub original: String,

    #[serde(default)]
    pub section: Option<String>,

    #[serde(default)]
    pub label: Option<String>,
}

/// A single step in a scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Type into a field's control
    Type { field: String, value: String },

    /// Blur a field's control
    Blur { field: String },

    /// Click a field's delete toggle
    Toggle { field: String },

    /// Select a date through the picker widget
    Pick { field: String, value: String },

    /// Select a file on the upload control
    Upload { size_bytes: u64 },

    /// Attempt to submit the form
    Submit,

    /// Advance the logical clock
    Advance { ms: u64 },

    /// Run checks against the current form state
    Assert { checks: Vec<CheckSpec> },
}

/// A single check evaluated against the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckSpec {
    /// The field's summary row visibility
    RowVisible { field: String, expected: bool },

    /// The field's summary value text
    SummaryText { field: String, expected: String },

    /// The field's live control value
    ControlValue { field: String, expected: String },

    /// The field's delete overlay visibility
    OverlayVisible { field: String, expected: bool },

    /// The field's delete overlay text
    OverlayText { field: String, expected: String },

    /// Presence of the hidden `deleted_<section>` marker
    MarkerPresent { section: String, expected: bool },

    /// The aggregate "any changes" flag
    HasChanges { expected: bool },

    /// The "no changes" placeholder visibility
    PlaceholderVisible { expected: bool },

    /// Whether the submit control has been disabled
    SubmitDisabled { expected: bool },

    /// Number of banners currently attached to the form
    BannerCount { expected: usize },

    /// Recomputing the summary with no state change leaves it identical
    SummaryStable,
}

/// Result of evaluating a single check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckResult {
    /// Which step this check belongs to (0-indexed)
    pub step_index: usize,

    /// The check that was evaluated
    pub spec: CheckSpec,

    /// Whether the check passed
    pub passed: bool,

    /// Actual value found (for debugging failures)
    pub actual: Option<String>,

    /// Human-readable failure message
    pub message: Option<String>,
}

/// Result of replaying a complete scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Name of the scenario that was run
    pub scenario_name: String,

    /// Whether all steps and checks passed
    pub passed: bool,

    /// Number of steps that were executed
    pub steps_run: usize,

    /// All check results collected during the run
    pub check_results: Vec<CheckResult>,

    /// Error message if the run failed outside a check
    pub error: Option<String>,
}
