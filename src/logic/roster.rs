//! Roster changes: adding players and soft-deleting them.

use crate::models::{CostSystem, Player, PlayerId, Session, SessionError, SkillTier};
use chrono::{DateTime, Utc};

/// Add a player to the session roster. Requires configured settings.
/// In the club system the fixed court fee is charged immediately.
pub fn add_player(
    session: &mut Session,
    name: impl Into<String>,
    skill: SkillTier,
    now: DateTime<Utc>,
) -> Result<PlayerId, SessionError> {
    if !session.settings.is_configured() {
        return Err(SessionError::NotConfigured);
    }
    let name = name.into();
    let name = name.trim();
    if name.is_empty() {
        return Err(SessionError::EmptyPlayerName);
    }
    let initial_cost = match session.settings.cost_system {
        CostSystem::Club => session.settings.fixed_cost,
        CostSystem::Split => 0.0,
    };
    let player = Player::new(name, skill, initial_cost, now);
    let id = player.id;
    session.players.push(player);
    Ok(id)
}

/// Soft-delete a player: move them to `deleted_players`, keeping their totals
/// for the session summary. Rejected while the player is on court, since an
/// active match must only reference roster players.
pub fn remove_player(session: &mut Session, player_id: PlayerId) -> Result<(), SessionError> {
    let idx = session
        .players
        .iter()
        .position(|p| p.id == player_id)
        .ok_or(SessionError::PlayerNotFound(player_id))?;
    if session.players[idx].is_playing {
        return Err(SessionError::PlayerIsPlaying(player_id));
    }
    let player = session.players.remove(idx);
    session.deleted_players.push(player);
    Ok(())
}
