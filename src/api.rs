#![cfg(feature = "std")]

use tokio::time::Duration;

use crate::{
    common::{GameError, GameState, ShotResult},
    coord::Coord,
    session::WaitOutcome,
    ship::{Orientation, Ship},
};

/// Gameplay operations as seen by one player. The player's identity is
/// bound by the implementor and never passed in.
#[async_trait::async_trait]
pub trait GameApi: Send + Sync {
    async fn get_ship_to_place(&self) -> Result<Option<Ship>, GameError>;
    async fn place_ship(&self, top_left: Coord, orientation: Orientation) -> Result<(), GameError>;
    async fn shoot_field(&self, coord: Coord) -> Result<ShotResult, GameError>;
    async fn get_game_state(&self) -> Result<GameState, GameError>;
    async fn get_last_opponent_move(&self) -> Result<(Option<Coord>, Option<Ship>), GameError>;
    /// Wait at most `timeout` for the player's state to leave `Wait`.
    async fn wait_for_turn(&self, timeout: Duration) -> Result<WaitOutcome<GameState>, GameError>;
}
