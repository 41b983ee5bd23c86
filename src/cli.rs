use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Whether any configuration update flag is set
pub fn is_config_update(args: &Args) -> bool {
    args.new_api_key.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Whether any lookup flag is set
pub fn has_queries(args: &Args) -> bool {
    args.player.is_some() || args.team.is_some() || args.position.is_some() || args.list_positions
}

/// Football squad lookup
///
/// Resolves fuzzy team and player names ("Man Utd", "Salah") against the
/// current squads of a competition and prints the matches as JSON.
///
/// Several lookups can be combined in one call; they are answered in the
/// order player, team, position, positions from a single roster fetch.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Look up a player by (approximate) name.
    #[arg(long = "player", short = 'p', help_heading = "Lookups")]
    pub player: Option<String>,

    /// Look up a team by name, short name or three-letter code.
    #[arg(long = "team", short = 't', help_heading = "Lookups")]
    pub team: Option<String>,

    /// List a team's players in a position, given as "team, position" or "team - position".
    #[arg(
        long = "position",
        short = 'P',
        help_heading = "Lookups",
        value_name = "TEAM, POSITION"
    )]
    pub position: Option<String>,

    /// List every position label in the current squads.
    #[arg(long = "list-positions", help_heading = "Lookups")]
    pub list_positions: bool,

    /// Store the football-data API key in the config file.
    #[arg(long = "set-api-key", help_heading = "Configuration", value_name = "KEY")]
    pub new_api_key: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stdout.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lookup_flags() {
        let args = Args::try_parse_from([
            "squad_lookup",
            "--player",
            "Salah",
            "--position",
            "Liverpool, Winger",
            "--list-positions",
        ])
        .unwrap();

        assert_eq!(args.player.as_deref(), Some("Salah"));
        assert_eq!(args.position.as_deref(), Some("Liverpool, Winger"));
        assert!(args.list_positions);
        assert!(has_queries(&args));
        assert!(!is_config_update(&args));
    }

    #[test]
    fn test_parse_config_flags() {
        let args =
            Args::try_parse_from(["squad_lookup", "--set-api-key", "abc", "--clear-log-file"])
                .unwrap();

        assert!(is_config_update(&args));
        assert!(!has_queries(&args));
    }

    #[test]
    fn test_no_flags() {
        let args = Args::try_parse_from(["squad_lookup"]).unwrap();
        assert!(!has_queries(&args));
        assert!(!is_config_update(&args));
        assert!(!args.debug);
    }
}
