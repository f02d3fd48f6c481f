//! Match and queue transitions: create, enqueue, promote, delete, end.
//!
//! Every operation runs all of its checks before the first mutation, so a
//! returned error means the session is unchanged.

use crate::logic::rules::{active_court_count, has_played_before, shuttle_cost_per_player};
use crate::models::{
    CostSystem, CourtMatch, HistoryRecord, MatchId, PlayerId, QueueEntry, QueueId, Session,
    SessionError,
};
use chrono::{DateTime, Utc};

/// Check that the two teams name four distinct roster players, none on court.
fn validate_teams(
    session: &Session,
    team_1: &[PlayerId; 2],
    team_2: &[PlayerId; 2],
) -> Result<(), SessionError> {
    let ids = [team_1[0], team_1[1], team_2[0], team_2[1]];
    let distinct: std::collections::HashSet<_> = ids.iter().collect();
    if distinct.len() != 4 {
        return Err(SessionError::WrongNumberOfPlayers {
            selected: distinct.len(),
        });
    }
    for id in ids {
        let player = session
            .get_player(id)
            .ok_or(SessionError::PlayerNotFound(id))?;
        if player.is_playing {
            return Err(SessionError::PlayerIsPlaying(id));
        }
    }
    Ok(())
}

/// Lowest court number in 1..=courts not taken by an active match.
fn free_court(session: &Session) -> Option<u32> {
    (1..=session.settings.courts)
        .find(|c| !session.matches.iter().any(|m| m.is_active() && m.court == *c))
}

/// Put a validated pairing on court: create the match, record it in history,
/// and flag the four players as playing. Callers have already run all checks.
fn start_on_court(
    session: &mut Session,
    court: u32,
    team_1: [PlayerId; 2],
    team_2: [PlayerId; 2],
    now: DateTime<Utc>,
) -> MatchId {
    let m = CourtMatch::new(court, team_1, team_2, now);
    let id = m.id;
    session.match_history.push(HistoryRecord::new(team_1, team_2));
    for pid in m.player_ids() {
        if let Some(p) = session.get_player_mut(pid) {
            p.start_playing();
        }
    }
    session.matches.push(m);
    id
}

/// Create a match directly from a 4-player selection.
///
/// Requires configured settings, a free court, and four free roster players.
/// If the pairing is a rematch, `confirm_rematch` must be set or the call
/// fails with [`SessionError::RematchNeedsConfirmation`] so the client can
/// ask the user and re-submit.
pub fn create_match(
    session: &mut Session,
    team_1: [PlayerId; 2],
    team_2: [PlayerId; 2],
    confirm_rematch: bool,
    now: DateTime<Utc>,
) -> Result<MatchId, SessionError> {
    if !session.settings.is_configured() {
        return Err(SessionError::NotConfigured);
    }
    validate_teams(session, &team_1, &team_2)?;
    if !confirm_rematch && has_played_before(&team_1, &team_2, &session.match_history) {
        return Err(SessionError::RematchNeedsConfirmation);
    }
    if active_court_count(&session.matches) >= session.settings.courts as usize {
        return Err(SessionError::NoCourtAvailable);
    }
    let court = free_court(session).ok_or(SessionError::NoCourtAvailable)?;
    Ok(start_on_court(session, court, team_1, team_2, now))
}

/// Queue a team pairing for later. No court check: queuing is exactly for
/// when the courts are full.
pub fn enqueue_match(
    session: &mut Session,
    team_1: [PlayerId; 2],
    team_2: [PlayerId; 2],
    now: DateTime<Utc>,
) -> Result<QueueId, SessionError> {
    if !session.settings.is_configured() {
        return Err(SessionError::NotConfigured);
    }
    validate_teams(session, &team_1, &team_2)?;
    let entry = QueueEntry::new(team_1, team_2, now);
    let id = entry.id;
    session.queues.push(entry);
    Ok(id)
}

/// Promote a queue entry to a match. Court availability and player
/// availability are re-checked here: both may have changed since enqueue.
/// On success the entry is consumed.
pub fn promote_queue(
    session: &mut Session,
    queue_id: QueueId,
    now: DateTime<Utc>,
) -> Result<MatchId, SessionError> {
    if !session.settings.is_configured() {
        return Err(SessionError::NotConfigured);
    }
    let entry = session
        .get_queue(queue_id)
        .ok_or(SessionError::QueueNotFound(queue_id))?;
    let (team_1, team_2) = (entry.team_1, entry.team_2);
    validate_teams(session, &team_1, &team_2)?;
    if active_court_count(&session.matches) >= session.settings.courts as usize {
        return Err(SessionError::NoCourtAvailable);
    }
    let court = free_court(session).ok_or(SessionError::NoCourtAvailable)?;
    let match_id = start_on_court(session, court, team_1, team_2, now);
    session.queues.retain(|q| q.id != queue_id);
    Ok(match_id)
}

/// Delete a queue entry without playing it.
pub fn delete_queue(session: &mut Session, queue_id: QueueId) -> Result<(), SessionError> {
    if session.get_queue(queue_id).is_none() {
        return Err(SessionError::QueueNotFound(queue_id));
    }
    session.queues.retain(|q| q.id != queue_id);
    Ok(())
}

/// End an active match: stamp the end time and shuttle count, free the four
/// players (wait time restarts from zero, last play stamped), and in the club
/// system charge each participant for the shuttles used.
pub fn end_match(
    session: &mut Session,
    match_id: MatchId,
    shuttles_used: u32,
    now: DateTime<Utc>,
) -> Result<(), SessionError> {
    let idx = session
        .matches
        .iter()
        .position(|m| m.id == match_id)
        .ok_or(SessionError::MatchNotFound(match_id))?;
    if !session.matches[idx].is_active() {
        return Err(SessionError::MatchAlreadyEnded(match_id));
    }
    let participants = session.matches[idx].player_ids();
    session.matches[idx].end_time = Some(now);
    session.matches[idx].shuttles_used = shuttles_used;

    let shuttle_fee = match session.settings.cost_system {
        CostSystem::Club => shuttle_cost_per_player(shuttles_used, session.settings.shuttle_cost),
        CostSystem::Split => 0.0,
    };
    // Participants of an active match are always on the roster: remove_player
    // rejects playing players.
    for pid in participants {
        if let Some(p) = session.get_player_mut(pid) {
            p.stop_playing(now);
            p.cost += shuttle_fee;
        }
    }
    Ok(())
}
