use clap::Parser;
use readq::cli::commands::{cmd_registry, cmd_run};
use readq::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve trace file: CLI > config > off
    let trace_file = cli.trace.as_deref().or(config.trace.file.as_deref());

    match cli.command {
        Commands::Run {
            scenario,
            format,
            output,
        } => {
            // Resolve format/output: CLI flag wins, config fills the gap
            let format = if format == "console" && config.run.format != "console" {
                config.run.format.clone()
            } else {
                format
            };
            let output = output.or(config.run.output.clone());

            let all_passed = cmd_run(
                &scenario,
                &format,
                output.as_deref(),
                cli.verbose,
                trace_file,
            )?;
            if !all_passed {
                std::process::exit(1);
            }
        }
        Commands::Registry => {
            cmd_registry();
        }
    }

    Ok(())
}
