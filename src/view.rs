#![cfg(feature = "std")]

use std::sync::Arc;

use tokio::time::Duration;

use crate::{
    api::GameApi,
    common::{GameError, GameState, ShotResult},
    coord::Coord,
    player::PlayerId,
    session::{Session, WaitOutcome},
    ship::{Orientation, Ship},
    snapshot::PlayerSnapshot,
};

/// One player's handle on a shared game.
#[derive(Clone, Debug)]
pub struct PlayerView {
    session: Arc<Session>,
    player: PlayerId,
}

impl PlayerView {
    pub fn new(session: Arc<Session>, player: PlayerId) -> Self {
        Self { session, player }
    }

    pub fn player(&self) -> &PlayerId {
        &self.player
    }

    pub fn opponent(&self) -> Option<&PlayerId> {
        self.session.opponent_of(&self.player)
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// `true` if both views look at the same game.
    pub fn same_game(&self, other: &PlayerView) -> bool {
        Arc::ptr_eq(&self.session, &other.session)
    }

    /// Identity of whoever may shoot next.
    pub async fn whose_turn(&self) -> PlayerId {
        self.session.read(|g| g.whose_turn().clone()).await
    }

    pub async fn snapshot(&self) -> Result<PlayerSnapshot, GameError> {
        self.session
            .read(|g| PlayerSnapshot::capture(g, &self.player))
            .await
    }
}

impl PartialEq for PlayerView {
    fn eq(&self, other: &Self) -> bool {
        self.same_game(other) && self.player == other.player
    }
}

impl Eq for PlayerView {}

#[async_trait::async_trait]
impl GameApi for PlayerView {
    async fn get_ship_to_place(&self) -> Result<Option<Ship>, GameError> {
        self.session
            .read(|g| g.get_ship_to_place(&self.player).map(|s| s.cloned()))
            .await
    }

    async fn place_ship(&self, top_left: Coord, orientation: Orientation) -> Result<(), GameError> {
        self.session
            .mutate(|g| g.place_ship(&self.player, top_left, orientation))
            .await
    }

    async fn shoot_field(&self, coord: Coord) -> Result<ShotResult, GameError> {
        self.session
            .mutate(|g| g.shoot_field(&self.player, coord))
            .await
    }

    async fn get_game_state(&self) -> Result<GameState, GameError> {
        self.session.read(|g| g.get_game_state(&self.player)).await
    }

    async fn get_last_opponent_move(&self) -> Result<(Option<Coord>, Option<Ship>), GameError> {
        self.session
            .read(|g| g.get_last_opponent_move(&self.player))
            .await
    }

    async fn wait_for_turn(&self, timeout: Duration) -> Result<WaitOutcome<GameState>, GameError> {
        self.session.wait_for_turn(&self.player, timeout).await
    }
}
