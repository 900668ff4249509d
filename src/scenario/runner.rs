use std::collections::HashMap;

use crate::registry::field_spec::{FieldKey, FieldKind, FieldSpec};
use crate::registry::registry::{FieldRegistry, date_field, text_field};
use crate::scenario::context::RunContext;
use crate::scenario::error::ScenarioError;
use crate::scenario::scenario_model::{
    CheckResult, CheckSpec, FieldFixture, Scenario, ScenarioResult, ScenarioStep,
};
use crate::session::controller::{FormEvent, FormSession, SUBMIT_ID, seed_document};
use crate::submit::guard::SUBMIT_DISABLED_CLASS;
use crate::summary::engine::NO_CHANGES_ID;
use crate::trace::logger::TraceLogger;

/// Replays a Scenario step-by-step through a fresh FormSession.
pub struct ScenarioRunner;

impl ScenarioRunner {
    /// Run a complete scenario.
    ///
    /// Returns a ScenarioResult with pass/fail status, check results, and
    /// any error that occurred while building the fixture.
    pub fn run(scenario: &Scenario) -> ScenarioResult {
        Self::run_traced(scenario, TraceLogger::disabled())
    }

    pub fn run_traced(scenario: &Scenario, tracer: TraceLogger) -> ScenarioResult {
        let mut session = match Self::build_session(scenario) {
            Ok(session) => session.with_tracer(tracer),
            Err(e) => {
                return ScenarioResult {
                    scenario_name: scenario.name.clone(),
                    passed: false,
                    steps_run: 0,
                    check_results: Vec::new(),
                    error: Some(format!("Failed to build form fixture: {}", e)),
                };
            }
        };

        let mut ctx = RunContext::new();

        for (i, step) in scenario.steps.iter().enumerate() {
            ctx.current_step = i;
            Self::execute_step(step, i, &mut session, &mut ctx);
        }

        let passed = ctx.all_passed();
        ScenarioResult {
            scenario_name: scenario.name.clone(),
            passed,
            steps_run: scenario.steps.len(),
            check_results: ctx.check_results,
            error: None,
        }
    }

    /// Build a session from the scenario's field fixtures: a registry wired
    /// with the page's id conventions and a seeded document.
    pub fn build_session(scenario: &Scenario) -> Result<FormSession, ScenarioError> {
        let registry =
            FieldRegistry::from_specs(scenario.fields.iter().map(fixture_spec).collect());

        for (i, step) in scenario.steps.iter().enumerate() {
            for field in step_fields(step) {
                if !registry.contains(&FieldKey::new(field)) {
                    return Err(ScenarioError::UnknownField {
                        field: field.to_string(),
                        context: format!("referenced by step {}", i),
                    });
                }
            }
        }

        let originals: HashMap<FieldKey, String> = scenario
            .fields
            .iter()
            .map(|f| (FieldKey::new(&f.key), f.original.clone()))
            .collect();

        let doc = seed_document(&registry, &originals);
        Ok(FormSession::new(registry, doc))
    }

    /// Execute a single step.
    fn execute_step(
        step: &ScenarioStep,
        step_index: usize,
        session: &mut FormSession,
        ctx: &mut RunContext,
    ) {
        match step {
            ScenarioStep::Type { field, value } => {
                session.dispatch(FormEvent::Input {
                    field: FieldKey::new(field),
                    value: value.clone(),
                });
            }
            ScenarioStep::Blur { field } => {
                session.dispatch(FormEvent::Blur {
                    field: FieldKey::new(field),
                });
            }
            ScenarioStep::Toggle { field } => {
                session.dispatch(FormEvent::ToggleClick {
                    field: FieldKey::new(field),
                });
            }
            ScenarioStep::Pick { field, value } => {
                session.dispatch(FormEvent::DatePick {
                    field: FieldKey::new(field),
                    value: value.clone(),
                });
            }
            ScenarioStep::Upload { size_bytes } => {
                session.dispatch(FormEvent::FileSelected {
                    size_bytes: *size_bytes,
                });
            }
            ScenarioStep::Submit => {
                session.dispatch(FormEvent::Submit);
            }
            ScenarioStep::Advance { ms } => {
                session.dispatch(FormEvent::Advance { ms: *ms });
            }
            ScenarioStep::Assert { checks } => {
                let results = checks
                    .iter()
                    .map(|c| Self::evaluate_one(c, step_index, session))
                    .collect();
                ctx.record_checks(results);
            }
        }
    }

    /// Evaluate a single check against the current form state.
    fn evaluate_one(check: &CheckSpec, step_index: usize, session: &mut FormSession) -> CheckResult {
        match check {
            CheckSpec::RowVisible { field, expected } => {
                match lookup(session, field, check, step_index) {
                    Ok(spec) => {
                        let actual = session.doc().is_visible(&spec.summary_row_id);
                        bool_result(check, step_index, *expected, actual, "summary row visibility")
                    }
                    Err(result) => result,
                }
            }

            CheckSpec::SummaryText { field, expected } => {
                match lookup(session, field, check, step_index) {
                    Ok(spec) => {
                        let actual = session
                            .doc()
                            .text(&spec.summary_value_id)
                            .unwrap_or("")
                            .to_string();
                        text_result(check, step_index, expected, &actual, "summary text")
                    }
                    Err(result) => result,
                }
            }

            CheckSpec::ControlValue { field, expected } => {
                match lookup(session, field, check, step_index) {
                    Ok(spec) => {
                        let actual = session.doc().value(&spec.input_id).unwrap_or("").to_string();
                        text_result(check, step_index, expected, &actual, "control value")
                    }
                    Err(result) => result,
                }
            }

            CheckSpec::OverlayVisible { field, expected } => {
                match lookup_overlay(session, field, check, step_index) {
                    Ok(overlay_id) => {
                        let actual = session.doc().is_visible(&overlay_id);
                        bool_result(check, step_index, *expected, actual, "overlay visibility")
                    }
                    Err(result) => result,
                }
            }

            CheckSpec::OverlayText { field, expected } => {
                match lookup_overlay(session, field, check, step_index) {
                    Ok(overlay_id) => {
                        let actual = session.doc().text(&overlay_id).unwrap_or("").to_string();
                        text_result(check, step_index, expected, &actual, "overlay text")
                    }
                    Err(result) => result,
                }
            }

            CheckSpec::MarkerPresent { section, expected } => {
                let marker = format!("deleted_{}", section);
                let actual = session.doc().has_marker(&marker);
                bool_result(
                    check,
                    step_index,
                    *expected,
                    actual,
                    &format!("marker '{}' presence", marker),
                )
            }

            CheckSpec::HasChanges { expected } => {
                let actual = session.has_changes();
                bool_result(check, step_index, *expected, actual, "has_changes")
            }

            CheckSpec::PlaceholderVisible { expected } => {
                let actual = session.doc().is_visible(NO_CHANGES_ID);
                bool_result(check, step_index, *expected, actual, "placeholder visibility")
            }

            CheckSpec::SubmitDisabled { expected } => {
                let actual = session.doc().has_class(SUBMIT_ID, SUBMIT_DISABLED_CLASS);
                bool_result(check, step_index, *expected, actual, "submit disabled")
            }

            CheckSpec::BannerCount { expected } => {
                let actual = session.doc().banners().len();
                CheckResult {
                    step_index,
                    spec: check.clone(),
                    passed: actual == *expected,
                    actual: Some(actual.to_string()),
                    message: if actual == *expected {
                        None
                    } else {
                        Some(format!("banner count is {} but expected {}", actual, expected))
                    },
                }
            }

            CheckSpec::SummaryStable => {
                let before = session.fingerprint();
                session.recompute_now();
                let after = session.fingerprint();
                let passed = before == after;
                CheckResult {
                    step_index,
                    spec: check.clone(),
                    passed,
                    actual: Some(after),
                    message: if passed {
                        None
                    } else {
                        Some("summary changed across an idle recompute".to_string())
                    },
                }
            }
        }
    }
}

/// Field keys a step references, for fixture validation.
fn step_fields(step: &ScenarioStep) -> Vec<&str> {
    match step {
        ScenarioStep::Type { field, .. }
        | ScenarioStep::Blur { field }
        | ScenarioStep::Toggle { field }
        | ScenarioStep::Pick { field, .. } => vec![field.as_str()],
        ScenarioStep::Assert { checks } => checks
            .iter()
            .filter_map(|c| match c {
                CheckSpec::RowVisible { field, .. }
                | CheckSpec::SummaryText { field, .. }
                | CheckSpec::ControlValue { field, .. }
                | CheckSpec::OverlayVisible { field, .. }
                | CheckSpec::OverlayText { field, .. } => Some(field.as_str()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn fixture_spec(fixture: &FieldFixture) -> FieldSpec {
    match (fixture.section.as_deref(), fixture.label.as_deref()) {
        (Some(section), Some(label)) => match fixture.kind {
            FieldKind::Date => date_field(&fixture.key, section, label),
            FieldKind::Text => text_field(&fixture.key, section, label),
        },
        _ => FieldSpec {
            key: FieldKey::new(&fixture.key),
            kind: fixture.kind,
            input_id: fixture.key.clone(),
            summary_row_id: format!("li_{}", fixture.key),
            summary_value_id: format!("novo_{}", fixture.key),
            toggle: None,
        },
    }
}

fn lookup<'a>(
    session: &'a FormSession,
    field: &str,
    check: &CheckSpec,
    step_index: usize,
) -> Result<&'a FieldSpec, CheckResult> {
    session
        .registry()
        .get(&FieldKey::new(field))
        .ok_or_else(|| CheckResult {
            step_index,
            spec: check.clone(),
            passed: false,
            actual: None,
            message: Some(format!("field '{}' is not registered", field)),
        })
}

fn lookup_overlay(
    session: &FormSession,
    field: &str,
    check: &CheckSpec,
    step_index: usize,
) -> Result<String, CheckResult> {
    let spec = lookup(session, field, check, step_index)?;
    spec.toggle
        .as_ref()
        .map(|t| t.overlay_id.clone())
        .ok_or_else(|| CheckResult {
            step_index,
            spec: check.clone(),
            passed: false,
            actual: None,
            message: Some(format!("field '{}' has no delete toggle", field)),
        })
}

fn bool_result(
    check: &CheckSpec,
    step_index: usize,
    expected: bool,
    actual: bool,
    what: &str,
) -> CheckResult {
    CheckResult {
        step_index,
        spec: check.clone(),
        passed: actual == expected,
        actual: Some(actual.to_string()),
        message: if actual == expected {
            None
        } else {
            Some(format!("{} is {} but expected {}", what, actual, expected))
        },
    }
}

fn text_result(
    check: &CheckSpec,
    step_index: usize,
    expected: &str,
    actual: &str,
    what: &str,
) -> CheckResult {
    CheckResult {
        step_index,
        spec: check.clone(),
        passed: actual == expected,
        actual: Some(actual.to_string()),
        message: if actual == expected {
            None
        } else {
            Some(format!("{} is '{}' but expected '{}'", what, actual, expected))
        },
    }
}
