use clap::Parser;
use std::process::ExitCode;

use pokebuilder::cli::{self, Cli};
use pokebuilder::config::AppConfig;
use pokebuilder::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    logging::init(cli.verbose);

    let config = AppConfig::load(cli.catalog.clone(), cli.teams.clone());
    tracing::debug!(
        catalog = %config.catalog_path.display(),
        teams = %config.teams_path.display(),
        "Configuration resolved"
    );

    let stdout = std::io::stdout();
    match cli::run(cli, &config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(code = err.code, "Command failed");
            eprintln!("Error: {}", err);
            err.exit_code()
        }
    }
}
