use crate::schedule::models::{GameRecord, GameStatus, RawGame, Team};
use chrono::NaiveDate;

/// Test utilities for creating mock teams, games and raw records.
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a roster from bare ids. Display name is the id with the
    /// first letter uppercased, abbreviation is the first three letters.
    pub fn create_teams(ids: &[&str]) -> Vec<Team> {
        ids.iter()
            .map(|id| {
                let mut chars = id.chars();
                let display_name = match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                };
                Team {
                    id: id.to_string(),
                    display_name,
                    abbreviation: Some(id.chars().take(3).collect::<String>().to_uppercase()),
                    primary_color: None,
                }
            })
            .collect()
    }

    /// Creates a basic scheduled game on the given ISO date.
    pub fn create_game(id: &str, home: &str, away: &str, date: &str) -> GameRecord {
        GameRecord {
            id: id.to_string(),
            home_team_id: home.to_string(),
            away_team_id: away.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid test date"),
            time: None,
            venue: None,
            sport: None,
            status: GameStatus::Scheduled,
        }
    }

    /// Creates a game pinned to a venue.
    pub fn create_game_at_venue(
        id: &str,
        home: &str,
        away: &str,
        date: &str,
        venue: &str,
    ) -> GameRecord {
        GameRecord {
            venue: Some(venue.to_string()),
            ..Self::create_game(id, home, away, date)
        }
    }

    /// Creates a game tagged with a sport.
    pub fn create_game_for_sport(
        id: &str,
        home: &str,
        away: &str,
        date: &str,
        sport: &str,
    ) -> GameRecord {
        GameRecord {
            sport: Some(sport.to_string()),
            ..Self::create_game(id, home, away, date)
        }
    }

    /// Creates a raw wire record with the canonical field names.
    pub fn create_raw_game(home: &str, away: &str, date: &str) -> RawGame {
        RawGame {
            id: Some(format!("{home}-{away}-{date}")),
            home_team_id: Some(home.to_string()),
            away_team_id: Some(away.to_string()),
            date: Some(date.to_string()),
            ..Default::default()
        }
    }

    /// Creates a single round-robin: every pair plays once, one game per
    /// day starting from `start_date`.
    pub fn create_round_robin(ids: &[&str], start_date: &str) -> Vec<GameRecord> {
        let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d").expect("valid test date");
        let mut games = Vec::new();
        let mut day = 0i64;
        for (i, home) in ids.iter().enumerate() {
            for away in &ids[i + 1..] {
                let date = start + chrono::Duration::days(day);
                games.push(GameRecord {
                    id: format!("{home}-{away}"),
                    home_team_id: home.to_string(),
                    away_team_id: away.to_string(),
                    date,
                    time: None,
                    venue: None,
                    sport: None,
                    status: GameStatus::Scheduled,
                });
                day += 1;
            }
        }
        games
    }
}
