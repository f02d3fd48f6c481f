//! Session business logic: roster, matches, queues, costs, wait times.

mod costs;
mod matches;
mod roster;
pub mod rules;
mod wait_time;

pub use costs::recalculate_split_costs;
pub use matches::{create_match, delete_queue, end_match, enqueue_match, promote_queue};
pub use roster::{add_player, remove_player};
pub use rules::{
    active_court_count, has_played_before, match_duration_minutes, minutes_between,
    shuttle_cost_per_player, split_cost,
};
pub use wait_time::{update_wait_times, WAIT_TIME_UPDATE_INTERVAL_SECS};
