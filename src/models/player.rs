//! Player and SkillTier data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches, queues, and lookups).
pub type PlayerId = Uuid;

/// Proficiency label, used to color-code and filter players.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum SkillTier {
    #[serde(rename = "BG")]
    Beginner,
    #[default]
    #[serde(rename = "N")]
    Novice,
    #[serde(rename = "S")]
    Strong,
    #[serde(rename = "P-")]
    PreProvincial,
    #[serde(rename = "P/P+")]
    Provincial,
    #[serde(rename = "C")]
    Champion,
}

/// A player in the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub skill: SkillTier,
    pub games_played: u32,
    /// Whole minutes waited since last play (or since joining, if never played).
    pub wait_time: i64,
    /// Accrued cost for this session.
    pub cost: f64,
    pub is_playing: bool,
    /// When the player's last match ended. None until they have played once.
    pub last_play_time: Option<DateTime<Utc>>,
    pub joined_at: DateTime<Utc>,
}

impl Player {
    /// Create a new player. Cost starts at `initial_cost` (the club fixed fee, or 0).
    pub fn new(
        name: impl Into<String>,
        skill: SkillTier,
        initial_cost: f64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            skill,
            games_played: 0,
            wait_time: 0,
            cost: initial_cost,
            is_playing: false,
            last_play_time: None,
            joined_at: now,
        }
    }

    /// Mark the player as in an active match.
    pub fn start_playing(&mut self) {
        self.is_playing = true;
        self.games_played += 1;
    }

    /// Mark the player as free again: wait restarts from zero, last play stamped.
    pub fn stop_playing(&mut self, now: DateTime<Utc>) {
        self.is_playing = false;
        self.wait_time = 0;
        self.last_play_time = Some(now);
    }
}
