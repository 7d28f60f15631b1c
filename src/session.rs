#![cfg(feature = "std")]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tokio::time::{timeout_at, Duration, Instant};

use crate::{
    common::{GameError, GameState},
    game::Game,
    player::PlayerId,
};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// Outcome of a timeout-bounded wait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome<T> {
    /// The awaited condition holds.
    Ready(T),
    /// The timeout elapsed first. Nothing changed; poll again later.
    TimedOut,
}

impl<T> WaitOutcome<T> {
    pub fn ready(self) -> Option<T> {
        match self {
            WaitOutcome::Ready(v) => Some(v),
            WaitOutcome::TimedOut => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, WaitOutcome::Ready(_))
    }
}

/// Change counter broadcast to everyone waiting on a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Signal {
    epoch: u64,
    ended: bool,
}

/// A game shared by its two players.
///
/// Mutations are serialized by the session's own lock, so unrelated sessions
/// never contend. Every successful mutation and the end of the session bump a
/// `watch` signal that turn waiters sleep on.
pub struct Session {
    id: u64,
    players: (PlayerId, PlayerId),
    game: Mutex<Game>,
    signal: watch::Sender<Signal>,
}

impl Session {
    pub fn new(game: Game) -> Arc<Self> {
        let (p1, p2) = game.players();
        let players = (p1.clone(), p2.clone());
        let (signal, _) = watch::channel(Signal {
            epoch: 0,
            ended: false,
        });
        Arc::new(Self {
            id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            players,
            game: Mutex::new(game),
            signal,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn opponent_of(&self, player: &PlayerId) -> Option<&PlayerId> {
        if player == &self.players.0 {
            Some(&self.players.1)
        } else if player == &self.players.1 {
            Some(&self.players.0)
        } else {
            None
        }
    }

    pub fn is_ended(&self) -> bool {
        self.signal.borrow().ended
    }

    /// Mark the session as over and wake every waiter. Idempotent.
    pub fn end(&self) {
        self.signal.send_modify(|s| s.ended = true);
        log::info!("session {} ended", self.id);
    }

    /// Run a read-only query against the game.
    pub async fn read<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        let game = self.game.lock().await;
        f(&game)
    }

    /// Run a mutation against the game and notify waiters if it succeeded.
    pub async fn mutate<R>(
        &self,
        f: impl FnOnce(&mut Game) -> Result<R, GameError>,
    ) -> Result<R, GameError> {
        let mut game = self.game.lock().await;
        if self.is_ended() {
            return Err(GameError::SessionEnded);
        }
        let out = f(&mut game)?;
        self.signal.send_modify(|s| s.epoch += 1);
        Ok(out)
    }

    /// Wait until `player` is no longer in [`GameState::Wait`], or `timeout`
    /// elapses. A finished game is still reported after the session ends;
    /// otherwise an ended session yields [`GameError::SessionEnded`].
    pub async fn wait_for_turn(
        &self,
        player: &PlayerId,
        timeout: Duration,
    ) -> Result<WaitOutcome<GameState>, GameError> {
        let deadline = Instant::now() + timeout;
        let mut rx = self.signal.subscribe();
        loop {
            // Mark the current epoch seen before looking at the game, so a
            // flip that lands in between still wakes us.
            let ended = rx.borrow_and_update().ended;
            let state = self.read(|g| g.get_game_state(player)).await?;
            if state.is_over() {
                return Ok(WaitOutcome::Ready(state));
            }
            if ended {
                return Err(GameError::SessionEnded);
            }
            if state != GameState::Wait {
                return Ok(WaitOutcome::Ready(state));
            }
            match timeout_at(deadline, rx.changed()).await {
                Err(_) => return Ok(WaitOutcome::TimedOut),
                Ok(Err(_)) => return Err(GameError::SessionEnded),
                Ok(Ok(())) => continue,
            }
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Session {{ id: {}, players: ({}, {}), ended: {} }}",
            self.id,
            self.players.0,
            self.players.1,
            self.is_ended()
        )
    }
}
