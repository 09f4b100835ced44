mod cli;

use ptmark::{config, input, report::Report, runner};
use ptmark_ptsl::PtslClient;
use ptmark_timecode::Timecode;

use clap::Parser;
use cli::Cli;
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag.
    // Logs go to stderr; stdout carries only the JSON result.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "ptmark=trace,ptmark_ptsl=trace,ptmark_timecode=debug".to_string()
        } else {
            "ptmark=info,ptmark_ptsl=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let (report, code) = match run(&cli) {
        Ok(report) => (report, ExitCode::SUCCESS),
        Err(report) => (report, ExitCode::FAILURE),
    };

    match report.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::error!("Failed to serialize result: {}", e);
            println!(
                r#"{{"success": false, "message": "Failed to serialize result", "markers_created": 0}}"#
            );
            return ExitCode::FAILURE;
        }
    }

    code
}

/// `Err` carries the report for input errors, which exit non-zero.
fn run(cli: &Cli) -> Result<Report, Report> {
    if !cli.bars {
        return Err(Report::failure(
            "Beat format no longer supported. Use --bars flag.",
        ));
    }

    let config = config::load_config_or_default(cli.config.as_deref())
        .map_err(|e| Report::failure(format!("Error: {:#}", e)))?;

    let json = input::resolve_json_argument(&cli.json_data)
        .map_err(|e| Report::failure(format!("{:#}", e)))?;

    let bars = input::parse_bars(&json).map_err(|e| Report::failure(format!("Error: {:#}", e)))?;

    let start: Timecode = cli
        .start_timecode
        .parse()
        .map_err(|e| Report::failure(format!("Error: {}", e)))?;

    tracing::info!("Placing {} bar markers from {}", bars.len(), start);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Report::failure(format!("Error: {}", e)))?;

    let client = PtslClient::new(&config.ptsl.client_options());
    let options = runner::RunOptions {
        clear_existing: cli.clear,
        first_slot: config.markers.first_slot,
        log_first: config.markers.log_first,
    };

    Ok(rt.block_on(runner::create_bar_markers(
        &client,
        &config.ptsl.credentials(),
        &bars,
        &start,
        &options,
    )))
}
