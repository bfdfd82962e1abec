use clap::Parser;
use autofill_detection::cli::commands::{cmd_fill, cmd_inspect, cmd_save};
use autofill_detection::cli::config::{Cli, Commands, load_config, resolve_trace_file};
use autofill_detection::cli::logging::init_logging;
use autofill_detection::trace::logger::TraceLogger;
use autofill_detection::trace::sink::{DiagnosticSink, TeeSink, TracingSink};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = load_config(cli.config.as_deref());

    // Resolve trace file: CLI > config
    let trace_logger = resolve_trace_file(cli.trace_file.as_deref(), &config).map(TraceLogger::new);
    let mut sinks: Vec<&dyn DiagnosticSink> = vec![&TracingSink];
    if let Some(logger) = &trace_logger {
        sinks.push(logger);
    }
    let sink = TeeSink::new(sinks);

    match cli.command {
        Commands::Fill {
            structure,
            client_state,
        } => {
            let offered = cmd_fill(&structure, client_state.as_deref(), &config.dataset, &sink)?;
            if !offered {
                std::process::exit(1);
            }
        }
        Commands::Save {
            structure,
            client_state,
        } => {
            cmd_save(&structure, client_state.as_deref(), &sink)?;
        }
        Commands::Inspect { structure, mode } => {
            cmd_inspect(&structure, &mode, &sink)?;
        }
    }

    Ok(())
}
