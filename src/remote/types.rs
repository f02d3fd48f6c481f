//! Wire types for the remote room/player service. Field names match the
//! service's JSON exactly.

use serde::{Deserialize, Serialize};

/// A room as returned by the remote service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub open_time: String,
    pub close_time: String,
    pub players: Vec<RemotePlayer>,
}

/// A player record as stored by the remote service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemotePlayer {
    pub id: i64,
    pub name: String,
    pub skill: String,
    pub join_time: String,
    pub number_of_matches: u32,
    pub number_of_shuttlecock: u32,
    pub room: i64,
}

/// Payload for creating a room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomForm {
    pub name: String,
    pub open_time: String,
    pub close_time: String,
}

/// Payload for creating or updating a player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerForm {
    pub name: String,
    pub skill: String,
    pub number_of_matches: u32,
    pub number_of_shuttlecock: u32,
    pub room: i64,
}

/// Top-level AI matchmaking response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchmakingResponse {
    pub room: MatchmakingRoom,
    pub matchmaking: MatchmakingData,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchmakingRoom {
    pub id: i64,
    pub name: String,
    pub player_count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchmakingData {
    pub teams: Vec<MatchmakingTeam>,
    #[serde(rename = "match")]
    pub suggested_match: MatchmakingMatch,
    pub analysis: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchmakingTeam {
    pub team_name: String,
    pub players: Vec<MatchmakingPlayer>,
    pub compatibility_score: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchmakingPlayer {
    pub id: i64,
    pub name: String,
    pub skill: String,
}

/// The suggested pairing of two of the proposed teams.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchmakingMatch {
    pub team1: String,
    pub team2: String,
    pub balance_score: f64,
    pub recommended_play_time: f64,
}
