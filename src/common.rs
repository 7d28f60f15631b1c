//! Common types for the game: shot results, player-visible state and errors.

use alloc::string::String;
use alloc::vec::Vec;

use crate::coord::{join_coords, Coord};
use crate::player::PlayerId;

/// Result of a shot at the opponent's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot hit a ship that still has intact segments.
    Hit,
    /// Shot hit the last intact segment of a ship.
    Sunk,
    /// Cell had been fired upon before; nothing changed.
    AlreadyShot,
}

/// What a player is allowed to do right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// Placement is unfinished or it is the opponent's turn.
    Wait,
    /// The player may shoot.
    CanPlay,
    Won,
    Lost,
}

impl GameState {
    /// `true` once the game has a winner.
    pub fn is_over(self) -> bool {
        matches!(self, GameState::Won | GameState::Lost)
    }
}

/// Errors returned by grid, game and matchmaking operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A coordinate lies outside the grid.
    OutOfRange(Coord),
    /// Placement overlaps cells that are already taken; carries every conflict.
    OccupiedCells(Vec<Coord>),
    /// Shot attempted while the player's state is not `CanPlay`.
    TurnViolation,
    /// No registry entry or seat exists for this identity.
    UnknownIdentity(PlayerId),
    /// The session was released while the operation was outstanding.
    SessionEnded,
    /// Every ship has already been placed.
    NothingToPlace,
    /// Text could not be read as a coordinate.
    InvalidCoord(String),
    /// Fleet has no ship cells or contains a ship of size zero.
    InvalidFleet,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfRange(c) => write!(f, "Coordinate {} is outside the grid", c),
            GameError::OccupiedCells(cells) => {
                write!(f, "Fields {} are already occupied", join_coords(cells))
            }
            GameError::TurnViolation => write!(f, "Not your turn"),
            GameError::UnknownIdentity(p) => write!(f, "Unknown player {}", p),
            GameError::SessionEnded => write!(f, "Session has ended"),
            GameError::NothingToPlace => write!(f, "All ships have been placed"),
            GameError::InvalidCoord(s) => write!(f, "Invalid coordinate {:?}", s),
            GameError::InvalidFleet => {
                write!(f, "Fleet needs at least one ship with a positive size")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
