use crate::schedule::models::GameRecord;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Conflict level of one matrix cell, derived purely from its game list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictLevel {
    /// No games between the pair.
    None,
    /// Exactly one game.
    Single,
    /// More than one game, no same-date collision.
    Multiple,
    /// Two or more games on the same calendar date sharing a venue or a
    /// participant.
    Conflict,
}

impl fmt::Display for ConflictLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConflictLevel::None => "none",
            ConflictLevel::Single => "single",
            ConflictLevel::Multiple => "multiple",
            ConflictLevel::Conflict => "conflict",
        };
        write!(f, "{label}")
    }
}

/// Classifies a game list by its date-collision behavior.
///
/// Time-of-day is ignored throughout; only the calendar date matters.
/// Games on the same date escalate to [`ConflictLevel::Conflict`] when two
/// of them share a venue or a participant. Same-date games at different
/// venues with fully disjoint participants stay at `Multiple` (raw dates
/// cannot distinguish a sanctioned doubleheader from a double-booking, so
/// series semantics are deliberately not modeled here).
pub fn classify_games(games: &[GameRecord]) -> ConflictLevel {
    match games.len() {
        0 => return ConflictLevel::None,
        1 => return ConflictLevel::Single,
        _ => {}
    }

    let mut by_date: HashMap<NaiveDate, Vec<&GameRecord>> = HashMap::new();
    for game in games {
        by_date.entry(game.date).or_default().push(game);
    }

    for (date, group) in &by_date {
        if group.len() < 2 {
            continue;
        }
        if group_has_collision(group) {
            debug!(
                "Date collision on {}: {} games share a venue or participant",
                date,
                group.len()
            );
            return ConflictLevel::Conflict;
        }
    }

    ConflictLevel::Multiple
}

/// True when any two games in a same-date group share a venue or a
/// participant.
fn group_has_collision(group: &[&GameRecord]) -> bool {
    for (i, &a) in group.iter().enumerate() {
        for &b in &group[i + 1..] {
            if a.shares_participant(b) {
                return true;
            }
            if let (Some(va), Some(vb)) = (&a.venue, &b.venue)
                && va == vb
            {
                return true;
            }
        }
    }
    false
}
