use loan_qualifier::config::{LoggingSettings, Settings};
use loan_qualifier::shell::{StdioPrompter, Wizard};
use std::io;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);
    info!("Starting loan qualifier");

    let stdin = io::stdin();
    let prompter = StdioPrompter::new(stdin.lock(), io::stdout());
    let mut wizard = Wizard::new(prompter, &settings.output.default_path);

    match wizard.run() {
        Ok(summary) => {
            info!(
                "Finished: {} of {} offers qualified, save outcome {:?}",
                summary.qualifying_loans, summary.total_offers, summary.save
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("Qualification aborted: {:?}", e);
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
