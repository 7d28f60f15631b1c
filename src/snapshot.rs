//! Serializable picture of a game from one player's side, for renderers.

use alloc::vec::Vec;

use crate::{
    common::{GameError, GameState},
    coord::Coord,
    game::Game,
    grid::Cell,
    player::PlayerId,
    ship::Ship,
};

/// What a player knows about one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellView {
    /// Nothing there, or nothing known yet on the opponent's side.
    Unknown,
    Water,
    Ship,
    Hit,
    Miss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSnapshot {
    pub player: PlayerId,
    pub opponent: PlayerId,
    pub state: GameState,
    pub grid_size: usize,
    /// Own grid, row by row.
    pub own_grid: Vec<CellView>,
    /// Opponent's grid as revealed by our shots, row by row.
    pub target_grid: Vec<CellView>,
    pub ships: Vec<Ship>,
    pub ship_to_place: Option<Ship>,
    pub last_opponent_move: Option<Coord>,
}

impl PlayerSnapshot {
    pub fn capture(game: &Game, player: &PlayerId) -> Result<Self, GameError> {
        let opponent = game.opponent_of(player)?.clone();
        let grid = game.grid(player)?;
        let incoming = game.moves(&opponent)?;
        let outgoing = game.moves(player)?;

        let own_grid = grid
            .iter()
            .map(|(coord, cell)| match cell {
                Cell::Empty => CellView::Water,
                Cell::Ship(_) => CellView::Ship,
                Cell::Shot => match incoming.iter().find(|m| m.coord == coord) {
                    Some(m) if m.ship.is_some() => CellView::Hit,
                    _ => CellView::Miss,
                },
            })
            .collect();

        let mut target_grid = alloc::vec![CellView::Unknown; grid.size() * grid.size()];
        for m in outgoing {
            target_grid[m.coord.y * grid.size() + m.coord.x] = if m.ship.is_some() {
                CellView::Hit
            } else {
                CellView::Miss
            };
        }

        Ok(Self {
            player: player.clone(),
            state: game.get_game_state(player)?,
            grid_size: grid.size(),
            own_grid,
            target_grid,
            ships: game.roster(player)?.ships().to_vec(),
            ship_to_place: game.get_ship_to_place(player)?.cloned(),
            last_opponent_move: incoming.last().map(|m| m.coord),
            opponent,
        })
    }

    /// Cell of the player's own grid at `coord`.
    pub fn own_cell(&self, coord: Coord) -> Option<CellView> {
        self.cell(&self.own_grid, coord)
    }

    /// Cell of the opponent's grid at `coord`.
    pub fn target_cell(&self, coord: Coord) -> Option<CellView> {
        self.cell(&self.target_grid, coord)
    }

    fn cell(&self, cells: &[CellView], coord: Coord) -> Option<CellView> {
        if coord.x < self.grid_size && coord.y < self.grid_size {
            cells.get(coord.y * self.grid_size + coord.x).copied()
        } else {
            None
        }
    }
}
