//! Split-system cost recalculation.

use crate::logic::rules::split_cost;
use crate::models::{CostSystem, Session, SessionError};

/// Overwrite every current player's cost with an even share of the configured
/// total. This is a full recompute on an explicit trigger, not an incremental
/// update: recalculating twice gives the same result. Deleted players keep
/// whatever they had accrued.
pub fn recalculate_split_costs(session: &mut Session) -> Result<(), SessionError> {
    if session.settings.cost_system != CostSystem::Split {
        return Err(SessionError::WrongCostSystem);
    }
    let share = split_cost(session.settings.total_cost, session.players.len());
    for p in &mut session.players {
        p.cost = share;
    }
    Ok(())
}
