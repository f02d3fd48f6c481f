//! Async client for the remote room/player service.
//!
//! Any non-2xx response is a generic failure with a fixed message; the error
//! body is not parsed. No retries: recovery is up to the caller.

use crate::remote::types::{MatchmakingResponse, PlayerForm, RemotePlayer, Room, RoomForm};
use anyhow::{bail, Context, Result};
use reqwest::Client;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Room/player API client.
pub struct RoomApiClient {
    client: Client,
    base_url: String,
}

impl RoomApiClient {
    /// Client against the default local service.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch all rooms.
    pub async fn fetch_rooms(&self) -> Result<Vec<Room>> {
        let url = format!("{}/rooms/", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch rooms")?;
        if !response.status().is_success() {
            bail!("Failed to fetch rooms");
        }
        response.json().await.context("Failed to fetch rooms")
    }

    /// Fetch one room with its players.
    pub async fn fetch_room(&self, id: i64) -> Result<Room> {
        let url = format!("{}/rooms/{}/", self.base_url, id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch room with ID {}", id))?;
        if !response.status().is_success() {
            bail!("Failed to fetch room with ID {}", id);
        }
        response
            .json()
            .await
            .with_context(|| format!("Failed to fetch room with ID {}", id))
    }

    /// Create a room.
    pub async fn create_room(&self, form: &RoomForm) -> Result<Room> {
        let url = format!("{}/rooms/", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(form)
            .send()
            .await
            .context("Failed to create room")?;
        if !response.status().is_success() {
            bail!("Failed to create room");
        }
        response.json().await.context("Failed to create room")
    }

    /// Create a player in a room.
    pub async fn create_player(&self, form: &PlayerForm) -> Result<RemotePlayer> {
        let url = format!("{}/players/", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(form)
            .send()
            .await
            .context("Failed to create player")?;
        if !response.status().is_success() {
            bail!("Failed to create player");
        }
        response.json().await.context("Failed to create player")
    }

    /// Update a player.
    pub async fn update_player(&self, id: i64, form: &PlayerForm) -> Result<RemotePlayer> {
        let url = format!("{}/players/{}/", self.base_url, id);
        let response = self
            .client
            .put(&url)
            .json(form)
            .send()
            .await
            .with_context(|| format!("Failed to update player with ID {}", id))?;
        if !response.status().is_success() {
            bail!("Failed to update player with ID {}", id);
        }
        response
            .json()
            .await
            .with_context(|| format!("Failed to update player with ID {}", id))
    }

    /// Delete a player.
    pub async fn delete_player(&self, id: i64) -> Result<()> {
        let url = format!("{}/players/{}/", self.base_url, id);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .with_context(|| format!("Failed to delete player with ID {}", id))?;
        if !response.status().is_success() {
            bail!("Failed to delete player with ID {}", id);
        }
        Ok(())
    }

    /// Ask the service for an AI-balanced match suggestion for a room.
    pub async fn fetch_matchmaking(&self, room_id: i64) -> Result<MatchmakingResponse> {
        let url = format!("{}/rooms/{}/ai_matchmaking/", self.base_url, room_id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to generate matchmaking")?;
        if !response.status().is_success() {
            bail!("Failed to generate matchmaking");
        }
        response
            .json()
            .await
            .context("Failed to generate matchmaking")
    }
}

impl Default for RoomApiClient {
    fn default() -> Self {
        Self::new()
    }
}
