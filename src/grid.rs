//! Square grid of cells holding ships and shot markers.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::GameError;
use crate::coord::Coord;
use crate::ship::ShipId;

/// Content of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Occupied by a ship from the owner's roster.
    Ship(ShipId),
    /// Fired upon.
    Shot,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty `size`×`size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    fn index(&self, coord: Coord) -> Result<usize, GameError> {
        if self.contains(coord) {
            Ok(coord.y * self.size + coord.x)
        } else {
            Err(GameError::OutOfRange(coord))
        }
    }

    pub fn read(&self, coord: Coord) -> Result<Cell, GameError> {
        Ok(self.cells[self.index(coord)?])
    }

    /// Overwrite a cell. An occupied cell may only be turned into `Shot`.
    pub fn write(&mut self, coord: Coord, value: Cell) -> Result<(), GameError> {
        let idx = self.index(coord)?;
        if !self.cells[idx].is_empty() && value != Cell::Shot {
            return Err(GameError::OccupiedCells(vec![coord]));
        }
        self.cells[idx] = value;
        Ok(())
    }

    /// Occupy exactly `coords` with `ship`. Either every cell is assigned or none.
    pub fn put(&mut self, ship: ShipId, coords: &[Coord]) -> Result<(), GameError> {
        if let Some(&outside) = coords.iter().find(|c| !self.contains(**c)) {
            return Err(GameError::OutOfRange(outside));
        }
        let occupied: Vec<Coord> = coords
            .iter()
            .copied()
            .filter(|c| !self.cells[c.y * self.size + c.x].is_empty())
            .collect();
        if !occupied.is_empty() {
            return Err(GameError::OccupiedCells(occupied));
        }
        for c in coords {
            self.cells[c.y * self.size + c.x] = Cell::Ship(ship);
        }
        log::debug!("Put ship {:?} at {:?}", ship, coords);
        Ok(())
    }

    /// Every cell with its coordinate, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coord::new(i % self.size, i / self.size), *cell))
    }
}
