#![cfg(feature = "std")]

//! Scripted player that drives a [`GameApi`] from placement to the last shot.
//!
//! Ships go on a fixed layout; shots follow a target list that is either a
//! row-by-row sweep or a seeded shuffle of it.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use tokio::time::Duration;

use crate::{
    api::GameApi,
    common::{GameState, ShotResult},
    config::Rules,
    coord::Coord,
    session::WaitOutcome,
    ship::Orientation,
};

/// How a scripted game went for one player.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GameReport {
    pub state: GameState,
    pub shots: usize,
    pub hits: usize,
    pub sunk: usize,
    /// Turn waits that timed out before the opponent moved.
    pub idle_polls: usize,
}

pub struct Autoplayer {
    layout: Vec<(Coord, Orientation)>,
    targets: VecDeque<Coord>,
    poll: Duration,
    max_idle_polls: usize,
}

impl Autoplayer {
    /// One ship per row, each starting in column `A`. Needs at least as many
    /// rows as ships and every ship to fit the grid width.
    pub fn stacked(rules: &Rules) -> anyhow::Result<Self> {
        let ships = rules.placement_order().count();
        if ships > rules.grid_size || rules.placement_order().any(|t| t.size() > rules.grid_size) {
            return Err(anyhow::anyhow!(
                "fleet of {} ships does not stack on a {}x{} grid",
                ships,
                rules.grid_size,
                rules.grid_size
            ));
        }
        let layout = (0..ships)
            .map(|row| (Coord::new(0, row), Orientation::Horizontal))
            .collect();
        Ok(Self {
            layout,
            targets: sweep(rules.grid_size),
            poll: Duration::from_millis(250),
            max_idle_polls: 40,
        })
    }

    /// Fire in a seeded random order instead of sweeping.
    pub fn shuffled(mut self, rng: &mut SmallRng) -> Self {
        let mut targets: Vec<Coord> = self.targets.drain(..).collect();
        targets.shuffle(rng);
        self.targets = targets.into();
        self
    }

    /// How long each turn wait may block, and how many empty waits in a row
    /// are tolerated before giving up on the opponent.
    pub fn with_polling(mut self, poll: Duration, max_idle_polls: usize) -> Self {
        self.poll = poll;
        self.max_idle_polls = max_idle_polls;
        self
    }

    /// Place the fleet, then shoot whenever it is our turn until the game ends.
    pub async fn play<A: GameApi + ?Sized>(&mut self, api: &A) -> anyhow::Result<GameReport> {
        for (top_left, orientation) in self.layout.iter().copied() {
            api.place_ship(top_left, orientation).await?;
        }
        if let Some(ship) = api.get_ship_to_place().await? {
            return Err(anyhow::anyhow!("{} left unplaced", ship.name()));
        }

        let mut report = GameReport {
            state: GameState::Wait,
            shots: 0,
            hits: 0,
            sunk: 0,
            idle_polls: 0,
        };
        let mut idle = 0;
        loop {
            let state = match api.wait_for_turn(self.poll).await? {
                WaitOutcome::Ready(state) => state,
                WaitOutcome::TimedOut => {
                    idle += 1;
                    report.idle_polls += 1;
                    if idle >= self.max_idle_polls {
                        return Err(anyhow::anyhow!("opponent idle for {} polls", idle));
                    }
                    continue;
                }
            };
            idle = 0;
            match state {
                GameState::Won | GameState::Lost => {
                    report.state = state;
                    return Ok(report);
                }
                GameState::Wait => continue,
                GameState::CanPlay => {}
            }

            let target = self
                .targets
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("ran out of targets"))?;
            let result = api.shoot_field(target).await?;
            log::debug!("autoplay shot {} -> {:?}", target, result);
            report.shots += 1;
            match result {
                ShotResult::Hit => report.hits += 1,
                ShotResult::Sunk => {
                    report.hits += 1;
                    report.sunk += 1;
                }
                ShotResult::Miss | ShotResult::AlreadyShot => {}
            }
        }
    }
}

/// Every cell, row by row.
fn sweep(grid_size: usize) -> VecDeque<Coord> {
    (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Coord::new(x, y)))
        .collect()
}
