// src/main.rs
use chrono::NaiveDate;
use clap::Parser;
use matchup_matrix::cli::{Args, is_config_operation};
use matchup_matrix::config::Config;
use matchup_matrix::error::AppError;
use matchup_matrix::matrix::Matrix;
use matchup_matrix::schedule::{load_schedule_file, normalize_games};
use matchup_matrix::stats::ScheduleStatistics;
use matchup_matrix::{logging, report};

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Validate argument combinations
    if args.conflicts_only && args.cell.is_some() {
        return Err(AppError::config_error(
            "Cannot use both --conflicts-only and --cell in the same run",
        ));
    }

    let (log_file_path, _guard) = logging::setup_logging(&args)?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Handle configuration operations without loading a schedule
    if args.list_config {
        Config::display()?;
        return Ok(());
    }

    if is_config_operation(&args) {
        let mut config = Config::load().unwrap_or_default();

        if let Some(new_file) = args.new_schedule_file {
            config.schedule_file = Some(new_file);
        }

        if let Some(new_sport) = args.new_default_sport {
            config.default_sport = Some(new_sport);
        }

        if let Some(new_log_path) = args.new_log_file_path {
            config.log_file_path = Some(new_log_path);
        } else if args.clear_log_file_path {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.validate()?;
        config.save()?;
        println!("Config updated successfully!");
        return Ok(());
    }

    let config = Config::load()?;

    let schedule_path = args
        .schedule_file
        .clone()
        .or(config.schedule_file.clone())
        .ok_or_else(|| {
            AppError::config_error(
                "No schedule file given. Pass one as an argument or set it with --set-schedule-file",
            )
        })?;

    let schedule = load_schedule_file(&schedule_path)?;
    let roster_ids = schedule.teams.iter().map(|t| t.id.clone()).collect();
    let normalized = normalize_games(&schedule.games, &roster_ids);

    if !normalized.is_clean() {
        print!(
            "{}",
            report::render_normalization_summary(&normalized, schedule.games.len())
        );
        println!();
    }

    let mut matrix = Matrix::build(&normalized.games, &schedule.teams);

    let sport = args.sport.as_ref().or(config.default_sport.as_ref());
    if let Some(sport) = sport {
        matrix = matrix.filter_by_sport(sport);
    }

    if let (Some(from), Some(to)) = (&args.from, &args.to) {
        let start = parse_cli_date(from)?;
        let end = parse_cli_date(to)?;
        matrix = matrix.filter_by_date_range(start, end)?;
    }

    if let Some(pair) = &args.cell {
        let cell = matrix.get_cell(&pair[0], &pair[1])?;
        print!("{}", report::render_cell(cell));
    } else if args.conflicts_only {
        print!("{}", report::render_conflicts(&matrix));
    } else {
        print!("{}", report::render_matrix(&matrix));
        println!();
        print!("{}", report::render_conflicts(&matrix));
    }

    if args.stats {
        let stats = ScheduleStatistics::compute(matrix.games(), matrix.teams());
        println!();
        print!("{}", report::render_statistics(&stats));
    }

    Ok(())
}

fn parse_cli_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| AppError::invalid_date(value, e.to_string()))
}
