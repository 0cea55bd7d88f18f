use tracing::info;

use stack_readiness::config::Config;
use stack_readiness::probe::build_client;
use stack_readiness::report::SessionReporter;
use stack_readiness::session::{standard_probes, SessionRunner};
use stack_readiness::{logging, VERSION};

/// Exit code for errors raised before any probe ran.
const EXIT_STARTUP: i32 = 2;

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Logging is not up yet
            eprintln!("Configuration error: {}", e);
            std::process::exit(EXIT_STARTUP);
        }
    };

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(EXIT_STARTUP);
    }

    match run(config) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!(error = %e, "Readiness session could not start");
            std::process::exit(EXIT_STARTUP);
        }
    }
}

fn run(config: Config) -> Result<i32, Box<dyn std::error::Error + Send + Sync>> {
    info!(version = VERSION, "Starting readiness session");
    config.log_summary();

    // Probes run one after another, a single thread is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let client = build_client()?;
    let runner = SessionRunner::new(
        standard_probes(&config, &client),
        SessionReporter::new("Platform readiness report", config.report_format),
    );

    let report = runtime.block_on(runner.execute());
    println!("{}", runner.render(&report));

    Ok(report.exit_code())
}
