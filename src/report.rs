use crate::matrix::{ConflictLevel, Matrix, MatrixCell};
use crate::schedule::normalizer::NormalizationReport;
use crate::stats::ScheduleStatistics;
use std::fmt::Write;

/// Column width for matrix cells and team labels.
const LABEL_WIDTH: usize = 5;

/// Glyph for one cell: `.` empty, `1` single, the game count for multiple,
/// `X` for a conflict.
fn cell_glyph(count: usize, level: ConflictLevel) -> String {
    match level {
        ConflictLevel::None => ".".to_string(),
        ConflictLevel::Single => "1".to_string(),
        ConflictLevel::Multiple => count.to_string(),
        ConflictLevel::Conflict => "X".to_string(),
    }
}

/// Renders the matchup matrix as a plain-text grid with team abbreviation
/// headers. Row/column order follows the roster order the matrix was
/// built with, so output is deterministic.
pub fn render_matrix(matrix: &Matrix) -> String {
    let teams = matrix.teams();
    let mut out = String::new();

    write!(out, "{:LABEL_WIDTH$}", "").unwrap();
    for team in teams {
        write!(out, "{:>LABEL_WIDTH$}", team.short_label()).unwrap();
    }
    out.push('\n');

    for row_team in teams {
        write!(out, "{:LABEL_WIDTH$}", row_team.short_label()).unwrap();
        for col_team in teams {
            if row_team.id == col_team.id {
                write!(out, "{:>LABEL_WIDTH$}", "-").unwrap();
                continue;
            }
            // Both ids come from the roster, so the lookup cannot fail
            let glyph = match matrix.get_cell(&row_team.id, &col_team.id) {
                Ok(cell) => cell_glyph(cell.game_count(), cell.conflict_level()),
                Err(_) => "?".to_string(),
            };
            write!(out, "{glyph:>LABEL_WIDTH$}").unwrap();
        }
        out.push('\n');
    }

    out
}

/// Renders one cell in detail: the pair, its conflict level, and every
/// game between the pair in input order.
pub fn render_cell(cell: &MatrixCell) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "{} - {} game(s), {}",
        cell.key,
        cell.game_count(),
        cell.conflict_level()
    )
    .unwrap();
    for game in &cell.games {
        let venue = game.venue.as_deref().unwrap_or("venue TBD");
        writeln!(
            out,
            "  {} {} @ {} ({}, {:?})",
            game.date, game.away_team_id, game.home_team_id, venue, game.status
        )
        .unwrap();
    }
    out
}

/// Renders the conflict listing: conflicting cells first, then team/day
/// double-bookings found across the whole filtered set.
pub fn render_conflicts(matrix: &Matrix) -> String {
    let mut out = String::new();

    let conflicts = matrix.conflicts();
    if conflicts.is_empty() {
        out.push_str("No cell conflicts detected.\n");
    } else {
        writeln!(out, "Cell conflicts ({}):", conflicts.len()).unwrap();
        for cell in conflicts {
            let dates: Vec<String> = cell.games.iter().map(|g| g.date.to_string()).collect();
            writeln!(
                out,
                "  {} - {} games ({})",
                cell.key,
                cell.game_count(),
                dates.join(", ")
            )
            .unwrap();
        }
    }

    let collisions = matrix.team_day_collisions();
    if collisions.is_empty() {
        out.push_str("No team double-bookings detected.\n");
    } else {
        writeln!(out, "Team double-bookings ({}):", collisions.len()).unwrap();
        for collision in collisions {
            writeln!(
                out,
                "  {} on {}: games {}",
                collision.team_id,
                collision.date,
                collision.game_ids.join(", ")
            )
            .unwrap();
        }
    }

    out
}

/// Renders per-team load and the weekly density distribution.
pub fn render_statistics(stats: &ScheduleStatistics) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "{:<16}{:>6}{:>6}{:>9}{:>6}",
        "Team", "Home", "Away", "Balance", "B2B"
    )
    .unwrap();
    for (team_id, load) in &stats.team_loads {
        writeln!(
            out,
            "{:<16}{:>6}{:>6}{:>9.2}{:>6}",
            team_id, load.home_games, load.away_games, load.balance, load.back_to_back_count
        )
        .unwrap();
    }

    out.push('\n');
    writeln!(out, "Games per ISO week:").unwrap();
    if stats.weekly_density.is_empty() {
        out.push_str("  (no games in range)\n");
    } else {
        for (week, count) in &stats.weekly_density {
            writeln!(out, "  {week}: {count}").unwrap();
        }
    }

    out
}

/// Renders the "N of M games loaded" line plus per-record issues from a
/// bulk normalization pass.
pub fn render_normalization_summary(report: &NormalizationReport, total: usize) -> String {
    let mut out = String::new();
    writeln!(out, "{} of {} games loaded.", report.games.len(), total).unwrap();
    for issue in &report.errors {
        writeln!(
            out,
            "  record {} (id: {}): {}",
            issue.index,
            issue.game_id.as_deref().unwrap_or("unknown"),
            issue.error
        )
        .unwrap();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::normalizer::normalize_games;
    use crate::testing_utils::TestDataBuilder;

    fn matrix_with_games() -> Matrix {
        let teams = TestDataBuilder::create_teams(&["kansas", "baylor", "tcu"]);
        let games = vec![
            TestDataBuilder::create_game_at_venue("g1", "kansas", "baylor", "2024-09-01", "V1"),
            TestDataBuilder::create_game_at_venue("g2", "kansas", "baylor", "2024-09-01", "V1"),
            TestDataBuilder::create_game("g3", "kansas", "tcu", "2024-09-08"),
        ];
        Matrix::build(&games, &teams)
    }

    #[test]
    fn test_matrix_grid_has_header_and_one_row_per_team() {
        let rendered = render_matrix(&matrix_with_games());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("KAN"));
        assert!(lines[0].contains("BAY"));
        assert!(lines[0].contains("TCU"));
    }

    #[test]
    fn test_matrix_grid_glyphs() {
        let rendered = render_matrix(&matrix_with_games());
        let kansas_row = rendered
            .lines()
            .find(|l| l.starts_with("KAN"))
            .unwrap();
        // Diagonal, conflict with baylor, single with tcu
        assert!(kansas_row.contains('-'));
        assert!(kansas_row.contains('X'));
        assert!(kansas_row.contains('1'));
    }

    #[test]
    fn test_cell_detail_lists_games_with_level() {
        let matrix = matrix_with_games();
        let cell = matrix.get_cell("kansas", "baylor").unwrap();
        let rendered = render_cell(cell);

        assert!(rendered.contains("baylor vs kansas - 2 game(s), conflict"));
        assert!(rendered.contains("V1"));
    }

    #[test]
    fn test_conflict_listing_names_the_pair() {
        let rendered = render_conflicts(&matrix_with_games());
        assert!(rendered.contains("baylor vs kansas"));
        assert!(rendered.contains("2024-09-01"));
        assert!(rendered.contains("Team double-bookings"));
    }

    #[test]
    fn test_conflict_listing_clean_schedule() {
        let teams = TestDataBuilder::create_teams(&["kansas", "baylor"]);
        let games = vec![TestDataBuilder::create_game(
            "g1", "kansas", "baylor", "2024-09-01",
        )];
        let rendered = render_conflicts(&Matrix::build(&games, &teams));
        assert!(rendered.contains("No cell conflicts"));
        assert!(rendered.contains("No team double-bookings"));
    }

    #[test]
    fn test_statistics_table_lists_every_team() {
        let teams = TestDataBuilder::create_teams(&["kansas", "baylor", "tcu"]);
        let games = vec![TestDataBuilder::create_game(
            "g1", "kansas", "baylor", "2024-09-01",
        )];
        let stats = ScheduleStatistics::compute(&games, &teams);
        let rendered = render_statistics(&stats);

        assert!(rendered.contains("kansas"));
        assert!(rendered.contains("tcu"));
        assert!(rendered.contains("2024-W35"));
    }

    #[test]
    fn test_normalization_summary_counts_and_issues() {
        let roster = ["kansas", "baylor"].iter().map(|s| s.to_string()).collect();
        let raw_games = vec![
            TestDataBuilder::create_raw_game("kansas", "baylor", "2024-09-01"),
            TestDataBuilder::create_raw_game("kansas", "duke", "2024-09-02"),
        ];
        let report = normalize_games(&raw_games, &roster);
        let rendered = render_normalization_summary(&report, raw_games.len());

        assert!(rendered.contains("1 of 2 games loaded."));
        assert!(rendered.contains("Unknown team id 'duke'"));
    }
}
