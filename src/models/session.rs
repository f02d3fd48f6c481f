//! Session aggregate, settings, and SessionError.

use crate::models::game::{CourtMatch, HistoryRecord, MatchId, QueueEntry, QueueId};
use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during session operations.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionError {
    /// Settings are missing or incomplete for the active cost system.
    NotConfigured,
    /// All courts are occupied by active matches.
    NoCourtAvailable,
    /// The proposed teams have met before; the caller must confirm the rematch.
    RematchNeedsConfirmation,
    /// A match needs exactly 4 distinct players.
    WrongNumberOfPlayers { selected: usize },
    /// Player not found in the current roster.
    PlayerNotFound(PlayerId),
    /// Player is in an active match and cannot be selected or removed.
    PlayerIsPlaying(PlayerId),
    /// Match not found.
    MatchNotFound(MatchId),
    /// Match has already been ended.
    MatchAlreadyEnded(MatchId),
    /// Queue entry not found.
    QueueNotFound(QueueId),
    /// Player name is empty after trimming.
    EmptyPlayerName,
    /// The action only applies to the other cost system.
    WrongCostSystem,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::NotConfigured => write!(f, "Please configure courts and fees first"),
            SessionError::NoCourtAvailable => write!(f, "No court available"),
            SessionError::RematchNeedsConfirmation => {
                write!(f, "These teams have played each other before")
            }
            SessionError::WrongNumberOfPlayers { selected } => {
                write!(f, "A match needs exactly 4 players (selected {})", selected)
            }
            SessionError::PlayerNotFound(_) => write!(f, "Player not found"),
            SessionError::PlayerIsPlaying(_) => write!(f, "Player is currently in a match"),
            SessionError::MatchNotFound(_) => write!(f, "Match not found"),
            SessionError::MatchAlreadyEnded(_) => write!(f, "Match has already ended"),
            SessionError::QueueNotFound(_) => write!(f, "Queue entry not found"),
            SessionError::EmptyPlayerName => write!(f, "Player name cannot be empty"),
            SessionError::WrongCostSystem => {
                write!(f, "This action is not available for the current cost system")
            }
        }
    }
}

/// Unique identifier for a session.
pub type SessionId = Uuid;

/// How costs are charged for the session.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostSystem {
    /// Flat fee per player at join plus per-shuttle cost at match end.
    #[default]
    Club,
    /// One total, split evenly across all current players on demand.
    Split,
}

/// Session configuration: courts and fees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub courts: u32,
    pub cost_system: CostSystem,
    /// Club system: court fee per player, charged once at join.
    pub fixed_cost: f64,
    /// Club system: fee per shuttle per player, charged at match end.
    pub shuttle_cost: f64,
    /// Split system: the total to divide across players.
    pub total_cost: f64,
    pub hourly_rate: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            courts: 0,
            cost_system: CostSystem::Club,
            fixed_cost: 0.0,
            shuttle_cost: 0.0,
            total_cost: 0.0,
            hourly_rate: false,
        }
    }
}

impl Settings {
    /// True once the active cost system's required fee fields are positive.
    pub fn is_configured(&self) -> bool {
        match self.cost_system {
            CostSystem::Club => self.fixed_cost > 0.0 && self.shuttle_cost > 0.0,
            CostSystem::Split => self.total_cost > 0.0,
        }
    }
}

/// Full session state: players, matches, queues, history, and settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    /// Current roster.
    pub players: Vec<Player>,
    /// Soft-deleted players, kept for the session summary. Never purged.
    pub deleted_players: Vec<Player>,
    /// All matches this session, active and ended.
    pub matches: Vec<CourtMatch>,
    /// Team pairings waiting for a free court.
    pub queues: Vec<QueueEntry>,
    /// Team compositions of every started match, for rematch detection.
    pub match_history: Vec<HistoryRecord>,
    pub settings: Settings,
}

impl Session {
    /// Create a new session with default (unconfigured) settings.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            id: Uuid::new_v4(),
            players: Vec::new(),
            deleted_players: Vec::new(),
            matches: Vec::new(),
            queues: Vec::new(),
            match_history: Vec::new(),
            settings,
        }
    }

    /// Look up a roster player by id.
    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Mutable reference to a roster player by id.
    pub fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Look up a match by id (active or ended).
    pub fn get_match(&self, id: MatchId) -> Option<&CourtMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut CourtMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    pub fn get_queue(&self, id: QueueId) -> Option<&QueueEntry> {
        self.queues.iter().find(|q| q.id == id)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
