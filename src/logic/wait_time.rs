//! Wait-time recomputation pass.

use crate::logic::rules::minutes_between;
use crate::models::Session;
use chrono::{DateTime, Utc};

/// How often the background updater runs.
pub const WAIT_TIME_UPDATE_INTERVAL_SECS: u64 = 10;

/// Recompute every non-playing player's wait time: whole minutes since their
/// last match ended, or since they joined if they have never played. Playing
/// players are left alone; their wait restarts from zero when their match
/// ends.
pub fn update_wait_times(session: &mut Session, now: DateTime<Utc>) {
    for p in &mut session.players {
        if p.is_playing {
            continue;
        }
        let reference = p.last_play_time.unwrap_or(p.joined_at);
        p.wait_time = minutes_between(reference, now);
    }
}
