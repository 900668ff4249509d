use readq::registry::field_spec::{FieldKey, FieldKind};
use readq::report::console::format_console_report;
use readq::report::report_model::SuiteReport;
use readq::scenario::runner::ScenarioRunner;
use readq::scenario::scenario_model::{CheckSpec, FieldFixture, Scenario, ScenarioStep};
use readq::session::controller::FormEvent;
use readq::submit::guard::SubmitOutcome;
use readq::load_form;

fn key(k: &str) -> FieldKey {
    FieldKey::new(k)
}

// =========================================================================
// End-to-end flows over the production registry
// =========================================================================

#[test]
fn full_readequacao_flow() {
    // Page load: AEREO has a scheduled date, HOTEL has a note, rest empty
    let mut session = load_form(&[
        ("data__1", "01/01/2025"),
        ("texto16__2", "Quarto duplo"),
        ("texto16__1", "\"\""),
    ]);
    assert!(!session.has_changes(), "Fresh form shows no changes");

    // User types a note for AEREO
    session.dispatch(FormEvent::Input {
        field: key("texto16__1"),
        value: "Novo texto".to_string(),
    });
    assert!(session.has_changes());

    // User cancels the AEREO date
    session.dispatch(FormEvent::ToggleClick { field: key("data__1") });
    assert_eq!(session.doc().text("novo_data__1"), Some("Apagado"));
    assert!(session.doc().has_marker("deleted_1A"));

    // User reschedules the HOTEL date through the picker
    session.dispatch(FormEvent::DatePick {
        field: key("data__2"),
        value: "20/07/2025".to_string(),
    });
    assert_eq!(session.doc().text("novo_data__2"), Some("20/07/2025"));

    // Untouched fields stay out of the summary
    assert!(!session.doc().is_visible("li_texto16__2"));
    assert!(!session.doc().is_visible("li_data__3"));

    // Valid submission disables the control
    let outcome = session.dispatch(FormEvent::Submit).expect("submit outcome");
    assert!(matches!(outcome, SubmitOutcome::Accepted { .. }));

    // The info banner goes away on its own
    session.dispatch(FormEvent::Advance { ms: 5000 });
    assert!(session.doc().banners().is_empty());
}

#[test]
fn has_changes_flips_with_the_first_visible_decision() {
    let mut session = load_form(&[("data__1", "01/01/2025")]);
    assert!(!session.has_changes());

    session.dispatch(FormEvent::ToggleClick { field: key("data__1") });
    assert!(session.has_changes(), "One deletion is enough");

    session.dispatch(FormEvent::ToggleClick { field: key("data__1") });
    assert!(!session.has_changes(), "Reverting the only change clears the flag");
}

#[test]
fn delete_then_revert_leaves_no_trace_of_the_original() {
    let mut session = load_form(&[("data__3", "10/05/2024")]);

    session.dispatch(FormEvent::ToggleClick { field: key("data__3") });
    session.dispatch(FormEvent::ToggleClick { field: key("data__3") });

    assert_eq!(session.doc().value("data__3"), Some(""));
    assert!(!session.doc().is_visible("li_data__3"));
    assert!(!session.doc().has_marker("deleted_3A"));
}

// =========================================================================
// Scenario suite + report
// =========================================================================

fn sample_scenarios() -> Vec<Scenario> {
    let aereo = FieldFixture {
        key: "data__1".to_string(),
        kind: FieldKind::Date,
        original: "01/01/2025".to_string(),
        section: Some("1A".to_string()),
        label: Some("AEREO".to_string()),
    };

    vec![
        Scenario {
            name: "passing".to_string(),
            fields: vec![aereo.clone()],
            steps: vec![
                ScenarioStep::Toggle {
                    field: "data__1".to_string(),
                },
                ScenarioStep::Assert {
                    checks: vec![CheckSpec::HasChanges { expected: true }],
                },
            ],
        },
        Scenario {
            name: "failing".to_string(),
            fields: vec![aereo],
            steps: vec![ScenarioStep::Assert {
                checks: vec![CheckSpec::HasChanges { expected: true }],
            }],
        },
    ]
}

#[test]
fn suite_report_counts_and_console_format() {
    let results = sample_scenarios()
        .iter()
        .map(ScenarioRunner::run)
        .collect::<Vec<_>>();

    let report = SuiteReport::from_results("integration", results).with_duration(1500);

    assert_eq!(report.total, 2);
    assert_eq!(report.passed, 1);
    assert_eq!(report.failed, 1);
    assert!(!report.all_passed());

    let console = format_console_report(&report);
    assert!(console.contains("=== Scenario Suite: integration ==="));
    assert!(console.contains("\u{2713} PASS  passing"));
    assert!(console.contains("\u{2717} FAIL  failing"));
    assert!(console.contains("HasChanges"), "Failed check named");
    assert!(console.contains("1 passed, 1 failed (2 total)"));
    assert!(console.contains("in 1.5s"));
}

#[test]
fn suite_report_serializes_to_json() {
    let results = sample_scenarios()
        .iter()
        .map(ScenarioRunner::run)
        .collect::<Vec<_>>();
    let report = SuiteReport::from_results("integration", results);

    let json = serde_json::to_string_pretty(&report).expect("serializes");
    assert!(json.contains("\"suite_name\": \"integration\""));
    assert!(json.contains("\"scenario_results\""));
}

// =========================================================================
// Shipped scenario files stay green
// =========================================================================

#[test]
fn shipped_scenarios_pass() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios");
    let scenarios = readq::cli::commands::load_scenarios(path).expect("shipped scenarios load");
    assert!(!scenarios.is_empty(), "Repo ships example scenarios");

    for scenario in &scenarios {
        let result = ScenarioRunner::run(scenario);
        assert!(
            result.passed,
            "Scenario '{}' failed: {:?} {:?}",
            scenario.name, result.error, result.check_results
        );
    }
}
