//! Match (court game), queue entry, and history record for 2v2 games.

use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Unique identifier for a queue entry.
pub type QueueId = Uuid;

/// A single 2v2 match on a numbered court.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourtMatch {
    pub id: MatchId,
    /// Court this match occupies (1-based, within the configured court count).
    pub court: u32,
    pub team_1: [PlayerId; 2],
    pub team_2: [PlayerId; 2],
    pub shuttles_used: u32,
    pub start_time: DateTime<Utc>,
    /// None while the match is still on court.
    pub end_time: Option<DateTime<Utc>>,
}

impl CourtMatch {
    pub fn new(court: u32, team_1: [PlayerId; 2], team_2: [PlayerId; 2], now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            court,
            team_1,
            team_2,
            shuttles_used: 0,
            start_time: now,
            end_time: None,
        }
    }

    /// Still occupying its court (no end time stamped).
    pub fn is_active(&self) -> bool {
        self.end_time.is_none()
    }

    /// All four participant ids, team 1 first.
    pub fn player_ids(&self) -> [PlayerId; 4] {
        [self.team_1[0], self.team_1[1], self.team_2[0], self.team_2[1]]
    }
}

/// A pre-formed team pairing waiting for a free court.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: QueueId,
    pub team_1: [PlayerId; 2],
    pub team_2: [PlayerId; 2],
    pub created_at: DateTime<Utc>,
}

impl QueueEntry {
    pub fn new(team_1: [PlayerId; 2], team_2: [PlayerId; 2], now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_1,
            team_2,
            created_at: now,
        }
    }
}

/// Team compositions of a started match, kept for rematch detection.
/// Teams are stored sorted so comparison is order-independent.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub team_1: [PlayerId; 2],
    pub team_2: [PlayerId; 2],
}

impl HistoryRecord {
    pub fn new(team_1: [PlayerId; 2], team_2: [PlayerId; 2]) -> Self {
        Self {
            team_1: sorted_team(team_1),
            team_2: sorted_team(team_2),
        }
    }
}

/// Normalize a team so member order does not matter.
pub fn sorted_team(mut team: [PlayerId; 2]) -> [PlayerId; 2] {
    if team[1] < team[0] {
        team.swap(0, 1);
    }
    team
}
