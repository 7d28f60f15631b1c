#![cfg(feature = "std")]

//! Pairs waiting players into games.
//!
//! The registry keeps, per identity, an optional seat in a game and a
//! single-fulfilment `watch` channel that resolves when the identity is
//! paired. Pairing happens entirely under the registry lock, so two callers
//! can never both complete the same match and nobody is paired twice.

use std::collections::{HashMap, VecDeque};

use tokio::sync::{watch, Mutex};
use tokio::time::{timeout, Duration};

use crate::{
    common::GameError,
    config::Rules,
    game::Game,
    player::PlayerId,
    session::{Session, WaitOutcome},
    view::PlayerView,
};

#[derive(Debug, Clone)]
enum MatchStatus {
    Waiting,
    Matched(PlayerView),
    Released,
}

/// Pending result of [`Matchmaker::request`]. Cheap to clone; polling it with
/// a timeout never consumes it.
#[derive(Debug, Clone)]
pub struct MatchTicket {
    player: PlayerId,
    rx: watch::Receiver<MatchStatus>,
}

impl MatchTicket {
    pub fn player(&self) -> &PlayerId {
        &self.player
    }

    /// The view if the player has been paired, without waiting.
    pub fn try_view(&self) -> Result<Option<PlayerView>, GameError> {
        match &*self.rx.borrow() {
            MatchStatus::Waiting => Ok(None),
            MatchStatus::Matched(view) => Ok(Some(view.clone())),
            MatchStatus::Released => Err(GameError::SessionEnded),
        }
    }

    /// Wait at most `limit` for an opponent.
    pub async fn wait(&self, limit: Duration) -> Result<WaitOutcome<PlayerView>, GameError> {
        let mut rx = self.rx.clone();
        let settled = timeout(
            limit,
            rx.wait_for(|s| !matches!(s, MatchStatus::Waiting)),
        )
        .await;
        match settled {
            Err(_) => Ok(WaitOutcome::TimedOut),
            Ok(Err(_)) => Err(GameError::SessionEnded),
            Ok(Ok(status)) => match &*status {
                MatchStatus::Matched(view) => Ok(WaitOutcome::Ready(view.clone())),
                _ => Err(GameError::SessionEnded),
            },
        }
    }
}

struct Entry {
    slot: Option<PlayerView>,
    ticket: watch::Sender<MatchStatus>,
}

impl Entry {
    fn new() -> Self {
        let (ticket, _) = watch::channel(MatchStatus::Waiting);
        Self { slot: None, ticket }
    }
}

#[derive(Default)]
struct Registry {
    entries: HashMap<PlayerId, Entry>,
    /// Unpaired identities, longest waiting first.
    waiting: VecDeque<PlayerId>,
    games_started: u64,
}

/// Registry pairing two distinct waiting players into one [`Game`].
pub struct Matchmaker {
    rules: Rules,
    registry: Mutex<Registry>,
}

impl Default for Matchmaker {
    fn default() -> Self {
        Self::new()
    }
}

impl Matchmaker {
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    /// Matchmaker whose games use `rules` instead of the standard fleet.
    pub fn with_rules(rules: Rules) -> Self {
        Self {
            rules,
            registry: Mutex::new(Registry::default()),
        }
    }

    /// Ask for a game. Registers `player` on first contact and pairs it with
    /// the longest-waiting other player if there is one. Asking again before a
    /// match returns the same pending ticket.
    pub async fn request(&self, player: impl Into<PlayerId>) -> MatchTicket {
        let player = player.into();
        let mut reg = self.registry.lock().await;
        let Registry {
            entries, waiting, ..
        } = &mut *reg;

        let entry = entries.entry(player.clone()).or_insert_with(|| {
            log::info!("{} is waiting for an opponent", player);
            waiting.push_back(player.clone());
            Entry::new()
        });
        let rx = entry.ticket.subscribe();
        let unmatched = entry.slot.is_none();

        if unmatched && waiting.len() >= 2 {
            if let Some(pos) = waiting.iter().position(|p| p != &player) {
                if let Some(opponent) = waiting.remove(pos) {
                    waiting.retain(|p| p != &player);
                    self.pair(&mut reg, opponent, player.clone());
                }
            }
        }

        MatchTicket { player, rx }
    }

    /// [`Matchmaker::request`] followed by a bounded wait for the match.
    pub async fn request_timeout(
        &self,
        player: impl Into<PlayerId>,
        limit: Duration,
    ) -> Result<WaitOutcome<PlayerView>, GameError> {
        self.request(player).await.wait(limit).await
    }

    fn pair(&self, reg: &mut Registry, p1: PlayerId, p2: PlayerId) {
        let session = Session::new(Game::with_rules(p1.clone(), p2.clone(), &self.rules));
        for player in [&p1, &p2] {
            if let Some(entry) = reg.entries.get_mut(player) {
                let view = PlayerView::new(session.clone(), player.clone());
                entry.slot = Some(view.clone());
                entry.ticket.send_replace(MatchStatus::Matched(view));
            }
        }
        reg.games_started += 1;
        log::info!(
            "paired {} with {} in session {} ({} moves first)",
            p1,
            p2,
            session.id(),
            p1
        );
    }

    /// Forget `player`. If it was seated in a game, the game ends and its
    /// opponent is forgotten too; both may request again afterwards.
    pub async fn release(&self, player: &PlayerId) -> Result<(), GameError> {
        let mut reg = self.registry.lock().await;
        let entry = reg
            .entries
            .remove(player)
            .ok_or_else(|| GameError::UnknownIdentity(player.clone()))?;
        reg.waiting.retain(|p| p != player);

        match entry.slot {
            None => {
                entry.ticket.send_replace(MatchStatus::Released);
                log::info!("{} stopped waiting", player);
            }
            Some(view) => {
                view.session().end();
                if let Some(opponent) = view.opponent() {
                    let bound_here = reg
                        .entries
                        .get(opponent)
                        .and_then(|e| e.slot.as_ref())
                        .map_or(false, |v| v.same_game(&view));
                    if bound_here {
                        reg.entries.remove(opponent);
                    }
                }
                log::info!("{} left session {}", player, view.session().id());
            }
        }
        Ok(())
    }

    /// The view currently held for `player`, `None` while still waiting.
    pub async fn player_view(&self, player: &PlayerId) -> Result<Option<PlayerView>, GameError> {
        let reg = self.registry.lock().await;
        reg.entries
            .get(player)
            .map(|e| e.slot.clone())
            .ok_or_else(|| GameError::UnknownIdentity(player.clone()))
    }

    /// Number of identities waiting for an opponent.
    pub async fn waiting_count(&self) -> usize {
        self.registry.lock().await.waiting.len()
    }

    /// Number of games with both players still registered.
    pub async fn active_games(&self) -> usize {
        let reg = self.registry.lock().await;
        reg.entries.values().filter(|e| e.slot.is_some()).count() / 2
    }

    /// Number of games created since construction.
    pub async fn games_started(&self) -> u64 {
        self.registry.lock().await.games_started
    }
}
