//! Client and wire types for the remote room/player service (variant B).

mod client;
mod types;

pub use client::RoomApiClient;
pub use types::{
    MatchmakingData, MatchmakingMatch, MatchmakingPlayer, MatchmakingResponse, MatchmakingRoom,
    MatchmakingTeam, PlayerForm, RemotePlayer, Room, RoomForm,
};
