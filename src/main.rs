mod cli;
mod config;
mod download;
mod error;
mod install;
mod naming;
mod release;
mod resolve;

use clap::Parser;
use cli::Cli;
use config::InstallConfig;
use install::Outcome;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(&cli);

    let config = match InstallConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    match install::run(&config).await {
        Ok(Outcome::Installed(path)) => {
            tracing::info!("Installed: {}", path.display());
            tracing::info!("Done!");
        }
        Ok(Outcome::Removed(path)) => {
            tracing::info!("Removed: {}", path.display());
            tracing::info!("Done!");
        }
        Ok(Outcome::Listed(tags)) => {
            for tag in tags {
                println!("{}", tag);
            }
        }
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn setup_logging(cli: &Cli) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if cli.quiet {
        "error"
    } else if cli.verbose == 0 {
        "info"
    } else if cli.verbose == 1 {
        "debug"
    } else {
        "trace"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr so list-mode tags stay clean on stdout.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();
}
