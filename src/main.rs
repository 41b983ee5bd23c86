mod cli;
mod commands;
mod logging;

use clap::{CommandFactory, Parser};
use cli::{Args, has_queries, is_config_update};
use squad_lookup::config::Config;
use squad_lookup::error::AppError;

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = logging::setup_logging(&args)?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return commands::handle_list_config_command();
    }

    if is_config_update(&args) {
        return commands::handle_config_update_command(&args);
    }

    if !has_queries(&args) {
        Args::command().print_help()?;
        return Ok(());
    }

    // Load config first to fail early if the API key is missing
    let config = Config::load()?;
    commands::handle_query_command(&args, &config)
}
