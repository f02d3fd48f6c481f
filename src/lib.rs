//! Badminton session web app: library with models and business logic.

pub mod logic;
pub mod models;
pub mod remote;

pub use logic::{
    active_court_count, add_player, create_match, delete_queue, end_match, enqueue_match,
    has_played_before, match_duration_minutes, promote_queue, recalculate_split_costs,
    remove_player, split_cost, update_wait_times, WAIT_TIME_UPDATE_INTERVAL_SECS,
};
pub use models::{
    CostSystem, CourtMatch, HistoryRecord, MatchId, Player, PlayerId, QueueEntry, QueueId, Session,
    SessionError, SessionId, Settings, SkillTier,
};
