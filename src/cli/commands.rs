use crate::registry::field_spec::FieldKind;
use crate::registry::registry::default_registry;
use crate::report::console::format_console_report;
use crate::report::report_model::SuiteReport;
use crate::scenario::error::ScenarioError;
use crate::scenario::runner::ScenarioRunner;
use crate::scenario::scenario_model::Scenario;
use crate::trace::logger::TraceLogger;

// ============================================================================
// run subcommand
// ============================================================================

/// Replay scenarios and return whether all passed.
pub fn cmd_run(
    scenario_path: &str,
    format: &str,
    output: Option<&str>,
    verbose: u8,
    trace_file: Option<&str>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let scenarios = load_scenarios(scenario_path)?;

    if scenarios.is_empty() {
        eprintln!("No scenarios found at: {}", scenario_path);
        return Ok(true);
    }

    if verbose > 0 {
        eprintln!("Replaying {} scenarios...", scenarios.len());
    }

    let start = std::time::Instant::now();

    let mut results = Vec::new();
    for scenario in &scenarios {
        if verbose > 0 {
            eprintln!("  Replaying: {}", scenario.name);
        }
        let tracer = match trace_file {
            Some(path) => TraceLogger::new(path),
            None => TraceLogger::disabled(),
        };
        let result = ScenarioRunner::run_traced(scenario, tracer);
        results.push(result);
    }

    let duration = start.elapsed().as_millis();

    let report = SuiteReport::from_results("CLI Run", results).with_duration(duration);
    let all_passed = report.all_passed();

    // Format report
    let output_content = match format {
        "json" => serde_json::to_string_pretty(&report)?,
        _ => format_console_report(&report),
    };

    // Write or print
    match output {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(all_passed)
}

/// Load scenarios from a single YAML file or a directory of YAML files.
pub fn load_scenarios(path: &str) -> Result<Vec<Scenario>, ScenarioError> {
    let metadata = std::fs::metadata(path).map_err(|e| ScenarioError::Load {
        path: path.to_string(),
        source: e,
    })?;

    if metadata.is_dir() {
        let mut scenarios = Vec::new();
        let entries = std::fs::read_dir(path).map_err(|e| ScenarioError::Load {
            path: path.to_string(),
            source: e,
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| ScenarioError::Load {
                path: path.to_string(),
                source: e,
            })?;
            let p = entry.path();
            if p.extension().map_or(false, |e| e == "yaml" || e == "yml") {
                scenarios.push(load_one(&p)?);
            }
        }
        // Sort by name for deterministic order
        scenarios.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(scenarios)
    } else {
        Ok(vec![load_one(std::path::Path::new(path))?])
    }
}

fn load_one(path: &std::path::Path) -> Result<Scenario, ScenarioError> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| ScenarioError::Load {
        path: display.clone(),
        source: e,
    })?;
    serde_yaml::from_str(&content).map_err(|e| ScenarioError::Parse {
        path: display,
        source: e,
    })
}

// ============================================================================
// registry subcommand
// ============================================================================

/// Print the production field registry.
pub fn cmd_registry() {
    let registry = default_registry();

    println!("{} registered fields:", registry.len());
    for spec in registry.iter() {
        let kind = match spec.kind {
            FieldKind::Date => "date",
            FieldKind::Text => "text",
        };
        match spec.toggle.as_ref() {
            Some(toggle) => println!(
                "  {:12} {:5} section={:3} label={:9} input={} row={} value={}",
                spec.key.as_str(),
                kind,
                toggle.section,
                toggle.label,
                spec.input_id,
                spec.summary_row_id,
                spec.summary_value_id,
            ),
            None => println!(
                "  {:12} {:5} input={} row={} value={}",
                spec.key.as_str(),
                kind,
                spec.input_id,
                spec.summary_row_id,
                spec.summary_value_id,
            ),
        }
    }
}
