use crate::cli::Args;
use squad_lookup::config::Config;
use squad_lookup::data_fetcher::api::FootballApiClient;
use squad_lookup::error::AppError;
use squad_lookup::tools::FootballTools;
use tracing::{info, warn};

/// Handles the --list-config command.
pub fn handle_list_config_command() -> Result<(), AppError> {
    Config::display()
}

/// Handles configuration update commands (--set-api-key, --set-log-file, --clear-log-file).
///
/// Starts from the saved config file, not from environment overrides, so
/// only the requested fields change on disk.
pub fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_saved().unwrap_or_else(|e| {
        warn!("Could not read existing config, starting from defaults: {}", e);
        Config::default()
    });

    if let Some(new_key) = &args.new_api_key {
        config.api_key = new_key.trim().to_string();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save()?;
    println!("Config updated successfully!");

    Ok(())
}

/// Answers the lookup flags in order: player, team, position, positions.
pub fn answer_queries(tools: &FootballTools, args: &Args) -> Vec<String> {
    let mut answers = Vec::new();

    if let Some(player) = &args.player {
        answers.push(tools.player_info(player));
    }
    if let Some(team) = &args.team {
        answers.push(tools.team_info(team));
    }
    if let Some(query) = &args.position {
        answers.push(tools.players_by_team_and_position(query));
    }
    if args.list_positions {
        answers.push(tools.list_positions());
    }

    answers
}

/// Fetches the roster once and prints the answer to every lookup flag.
pub fn handle_query_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let mut client = FootballApiClient::new(config)?;
    info!("Loading teams from {}", client.teams_url());

    let tools = FootballTools::from_client(&mut client, config.cache_ttl());
    for answer in answer_queries(&tools, args) {
        println!("{answer}");
    }

    Ok(())
}
