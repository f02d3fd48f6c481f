//! Data structures for the badminton session: players, matches, queues, settings.

mod game;
mod player;
mod session;

pub use game::{CourtMatch, HistoryRecord, MatchId, QueueEntry, QueueId};
pub use player::{Player, PlayerId, SkillTier};
pub use session::{CostSystem, Session, SessionError, SessionId, Settings};
