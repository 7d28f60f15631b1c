use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::{
    common::{GameError, GameState, ShotResult},
    config::Rules,
    coord::Coord,
    grid::{Cell, Grid},
    player::PlayerId,
    ship::{Orientation, Roster, Ship, ShipId},
};

/// A resolved shot: where it landed and which of the target's ships it hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub coord: Coord,
    pub ship: Option<ShipId>,
}

/// Everything one player owns inside a game.
#[derive(Debug, Clone)]
struct Side {
    player: PlayerId,
    grid: Grid,
    to_place: VecDeque<ShipId>,
    roster: Roster,
    moves: Vec<Move>,
}

impl Side {
    fn new(player: PlayerId, rules: &Rules) -> Self {
        let roster = Roster::new(rules.placement_order());
        let to_place = roster.ships().iter().map(Ship::id).collect();
        Self {
            player,
            grid: Grid::new(rules.grid_size),
            to_place,
            roster,
            moves: Vec::new(),
        }
    }
}

/// Two-player battleship state machine. Every operation is asked from the
/// point of view of one seated player; the opponent is looked up internally.
#[derive(Debug, Clone)]
pub struct Game {
    sides: [Side; 2],
    whose_turn: usize,
}

impl Game {
    /// Create a game with the default grid and fleet. `p1` moves first.
    pub fn new(p1: PlayerId, p2: PlayerId) -> Self {
        Self::with_rules(p1, p2, &Rules::default())
    }

    pub fn with_rules(p1: PlayerId, p2: PlayerId, rules: &Rules) -> Self {
        debug_assert_ne!(p1, p2, "a player cannot face themselves");
        Self {
            sides: [Side::new(p1, rules), Side::new(p2, rules)],
            whose_turn: 0,
        }
    }

    fn seat(&self, player: &PlayerId) -> Result<usize, GameError> {
        self.sides
            .iter()
            .position(|s| &s.player == player)
            .ok_or_else(|| GameError::UnknownIdentity(player.clone()))
    }

    /// Both seated players, first mover first.
    pub fn players(&self) -> (&PlayerId, &PlayerId) {
        (&self.sides[0].player, &self.sides[1].player)
    }

    pub fn opponent_of(&self, player: &PlayerId) -> Result<&PlayerId, GameError> {
        let seat = self.seat(player)?;
        Ok(&self.sides[1 - seat].player)
    }

    pub fn whose_turn(&self) -> &PlayerId {
        &self.sides[self.whose_turn].player
    }

    fn all_ships_placed(&self) -> bool {
        self.sides.iter().all(|s| s.to_place.is_empty())
    }

    pub fn get_game_state(&self, player: &PlayerId) -> Result<GameState, GameError> {
        let seat = self.seat(player)?;
        let state = if self.sides[seat].roster.all_sunk() {
            GameState::Lost
        } else if self.sides[1 - seat].roster.all_sunk() {
            GameState::Won
        } else if self.all_ships_placed() && seat == self.whose_turn {
            GameState::CanPlay
        } else {
            GameState::Wait
        };
        Ok(state)
    }

    /// The ship `player` has to place next, `None` once all are placed.
    pub fn get_ship_to_place(&self, player: &PlayerId) -> Result<Option<&Ship>, GameError> {
        let side = &self.sides[self.seat(player)?];
        Ok(side.to_place.front().and_then(|id| side.roster.get(*id)))
    }

    /// Place the ship returned by [`Game::get_ship_to_place`] with its
    /// top-left end at `top_left`.
    pub fn place_ship(
        &mut self,
        player: &PlayerId,
        top_left: Coord,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let seat = self.seat(player)?;
        let side = &mut self.sides[seat];
        let id = *side.to_place.front().ok_or(GameError::NothingToPlace)?;
        let size = side.roster.get(id).map_or(0, Ship::size);
        let coords = orientation
            .cells(top_left, size)
            .ok_or(GameError::OutOfRange(top_left))?;
        side.grid.put(id, &coords)?;
        side.to_place.pop_front();
        log::debug!(
            "{} placed ship {:?} at {} ({:?})",
            player,
            id,
            top_left,
            orientation
        );
        Ok(())
    }

    /// Fire at `coord` on the opponent's grid.
    pub fn shoot_field(&mut self, player: &PlayerId, coord: Coord) -> Result<ShotResult, GameError> {
        if self.get_game_state(player)? != GameState::CanPlay {
            log::warn!("{} tried to shoot out of turn", player);
            return Err(GameError::TurnViolation);
        }
        let seat = self.seat(player)?;
        let target = &mut self.sides[1 - seat];
        let (result, ship) = match target.grid.read(coord)? {
            Cell::Empty => {
                target.grid.write(coord, Cell::Shot)?;
                (ShotResult::Miss, None)
            }
            Cell::Shot => (ShotResult::AlreadyShot, None),
            Cell::Ship(id) => {
                target.grid.write(coord, Cell::Shot)?;
                let sunk = target
                    .roster
                    .get_mut(id)
                    .map_or(false, |ship| ship.register_hit());
                let result = if sunk { ShotResult::Sunk } else { ShotResult::Hit };
                (result, Some(id))
            }
        };
        if result != ShotResult::AlreadyShot {
            self.sides[seat].moves.push(Move { coord, ship });
            self.whose_turn = 1 - seat;
        }
        log::debug!("{} shot {}: {:?}", player, coord, result);
        Ok(result)
    }

    /// The opponent's most recent shot and the ship of `player` it hit, if any.
    pub fn get_last_opponent_move(
        &self,
        player: &PlayerId,
    ) -> Result<(Option<Coord>, Option<Ship>), GameError> {
        let seat = self.seat(player)?;
        let last = self.sides[1 - seat].moves.last();
        Ok(match last {
            Some(mv) => (
                Some(mv.coord),
                mv.ship.and_then(|id| self.sides[seat].roster.get(id)).cloned(),
            ),
            None => (None, None),
        })
    }

    /// Own grid of `player`.
    pub fn grid(&self, player: &PlayerId) -> Result<&Grid, GameError> {
        Ok(&self.sides[self.seat(player)?].grid)
    }

    /// Every ship `player` owns, placed or not.
    pub fn roster(&self, player: &PlayerId) -> Result<&Roster, GameError> {
        Ok(&self.sides[self.seat(player)?].roster)
    }

    /// Shots fired by `player`, oldest first.
    pub fn moves(&self, player: &PlayerId) -> Result<&[Move], GameError> {
        Ok(&self.sides[self.seat(player)?].moves)
    }
}
