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

/// Determines if the invocation is a pure configuration operation,
/// meaning no schedule file is loaded or analyzed.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_schedule_file.is_some()
        || args.new_default_sport.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Matchup Matrix - conference schedule analyzer
///
/// Builds the team-by-team matchup matrix from a scheduling backend's JSON
/// export, flags double-bookings (same date plus shared venue or
/// participant), and computes per-team load statistics: home/away balance,
/// rest-day gaps, back-to-back counts and weekly game density.
///
/// The export file is given as an argument or taken from the config file.
/// All analysis is offline; nothing is fetched over the network.
#[derive(Parser, Debug)]
#[command(author = "Niko Salonen", about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Schedule export file (JSON with "teams" and "games" arrays).
    /// Falls back to the schedule_file config setting when omitted.
    pub schedule_file: Option<String>,

    /// Restrict the matrix to games tagged with this sport.
    #[arg(short = 's', long = "sport", help_heading = "Filters")]
    pub sport: Option<String>,

    /// Start of an inclusive date-range filter, YYYY-MM-DD format.
    #[arg(long = "from", help_heading = "Filters", requires = "to")]
    pub from: Option<String>,

    /// End of an inclusive date-range filter, YYYY-MM-DD format.
    #[arg(long = "to", help_heading = "Filters", requires = "from")]
    pub to: Option<String>,

    /// Show only the cell for one team pair instead of the full matrix.
    #[arg(
        long = "cell",
        help_heading = "Display Options",
        num_args = 2,
        value_names = ["TEAM_A", "TEAM_B"]
    )]
    pub cell: Option<Vec<String>>,

    /// Include the load/balance statistics tables in the output.
    #[arg(long = "stats", help_heading = "Display Options")]
    pub stats: bool,

    /// Print only the conflict listing, skipping the matrix grid.
    #[arg(long = "conflicts-only", help_heading = "Display Options")]
    pub conflicts_only: bool,

    /// Update the default schedule file in config.
    #[arg(long = "set-schedule-file", help_heading = "Configuration")]
    pub new_schedule_file: Option<String>,

    /// Update the default sport filter in config.
    #[arg(long = "set-default-sport", help_heading = "Configuration")]
    pub new_default_sport: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: verbose logs are echoed to stdout in addition
    /// to the log file.
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
    fn test_config_operation_detection() {
        let args = Args::parse_from(["matchup_matrix", "--list-config"]);
        assert!(is_config_operation(&args));

        let args = Args::parse_from(["matchup_matrix", "schedule.json"]);
        assert!(!is_config_operation(&args));
    }

    #[test]
    fn test_cell_takes_two_values() {
        let args = Args::parse_from(["matchup_matrix", "schedule.json", "--cell", "kansas", "baylor"]);
        assert_eq!(
            args.cell,
            Some(vec!["kansas".to_string(), "baylor".to_string()])
        );
    }

    #[test]
    fn test_from_requires_to() {
        let result = Args::try_parse_from(["matchup_matrix", "schedule.json", "--from", "2024-09-01"]);
        assert!(result.is_err());

        let args = Args::parse_from([
            "matchup_matrix",
            "schedule.json",
            "--from",
            "2024-09-01",
            "--to",
            "2024-09-30",
        ]);
        assert_eq!(args.from.as_deref(), Some("2024-09-01"));
        assert_eq!(args.to.as_deref(), Some("2024-09-30"));
    }
}
