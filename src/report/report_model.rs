use serde::{Deserialize, Serialize};

use crate::scenario::scenario_model::ScenarioResult;

// ============================================================================
// Suite report — aggregates multiple ScenarioResult instances
// ============================================================================

/// Aggregated report for a suite of scenario runs.
///
/// Built from a `Vec<ScenarioResult>` via `from_results()`. Consumed by the
/// console reporter and the JSON output path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Name of the suite
    pub suite_name: String,

    /// Total number of scenarios
    pub total: usize,

    /// Number of passing scenarios
    pub passed: usize,

    /// Number of failing scenarios
    pub failed: usize,

    /// Total execution duration in milliseconds (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,

    /// Individual scenario results
    pub scenario_results: Vec<ScenarioResult>,
}

impl SuiteReport {
    /// Build a suite report from a list of scenario results.
    ///
    /// Automatically computes total, passed, and failed counts.
    pub fn from_results(suite_name: &str, results: Vec<ScenarioResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        Self {
            suite_name: suite_name.to_string(),
            total,
            passed,
            failed,
            duration_ms: None,
            scenario_results: results,
        }
    }

    /// Set the total execution duration.
    pub fn with_duration(mut self, duration_ms: u128) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Whether all scenarios in the suite passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
