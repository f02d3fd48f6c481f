//! Pure domain rules: rematch detection, durations, court counting, costs.

use crate::models::{CourtMatch, HistoryRecord, PlayerId};
use chrono::{DateTime, Utc};

/// Same two players regardless of order.
fn same_team(a: &[PlayerId; 2], b: &[PlayerId; 2]) -> bool {
    b.contains(&a[0]) && b.contains(&a[1])
}

/// True iff these two teams have already met, in either team-to-team assignment:
/// a history record of A-vs-B also matches a proposed B-vs-A pairing.
pub fn has_played_before(
    team_1: &[PlayerId; 2],
    team_2: &[PlayerId; 2],
    history: &[HistoryRecord],
) -> bool {
    history.iter().any(|h| {
        (same_team(team_1, &h.team_1) && same_team(team_2, &h.team_2))
            || (same_team(team_1, &h.team_2) && same_team(team_2, &h.team_1))
    })
}

/// Whole minutes between two timestamps, floored, never negative.
pub fn minutes_between(from: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - from).num_minutes().max(0)
}

/// Whole minutes a match has been running (floored, not rounded).
pub fn match_duration_minutes(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    minutes_between(start, now)
}

/// Number of matches still occupying a court.
pub fn active_court_count(matches: &[CourtMatch]) -> usize {
    matches.iter().filter(|m| m.is_active()).count()
}

/// Club system: what each participant owes for the shuttles a match consumed.
/// Each player pays per shuttle; the fee is not divided across the four.
pub fn shuttle_cost_per_player(shuttles_used: u32, shuttle_cost: f64) -> f64 {
    f64::from(shuttles_used) * shuttle_cost
}

/// Split system: even share of the total, 0 when there is nobody to charge.
pub fn split_cost(total_cost: f64, player_count: usize) -> f64 {
    if player_count == 0 {
        return 0.0;
    }
    total_cost / player_count as f64
}
