use crate::scenario::scenario_model::CheckResult;

/// Tracks the execution state and results of a running scenario.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Current step index (0-based)
    pub current_step: usize,

    /// All check results collected during execution
    pub check_results: Vec<CheckResult>,
}

impl RunContext {
    pub fn new() -> Self {
        RunContext::default()
    }

    /// Record check results from a step.
    pub fn record_checks(&mut self, results: Vec<CheckResult>) {
        self.check_results.extend(results);
    }

    /// Check if all recorded checks passed.
    pub fn all_passed(&self) -> bool {
        self.check_results.iter().all(|r| r.passed)
    }

    pub fn pass_count(&self) -> usize {
        self.check_results.iter().filter(|r| r.passed).count()
    }

    pub fn fail_count(&self) -> usize {
        self.check_results.iter().filter(|r| !r.passed).count()
    }

    pub fn total_count(&self) -> usize {
        self.check_results.len()
    }
}
