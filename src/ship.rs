//! Ship definitions and the per-player roster.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::coord::Coord;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends towards increasing x.
    Horizontal,
    /// Extends towards increasing y.
    Vertical,
}

impl Orientation {
    /// Cells covered by a ship of `size` whose top-left end sits at `top_left`.
    /// Returns `None` if the cells cannot even be addressed.
    pub fn cells(self, top_left: Coord, size: usize) -> Option<Vec<Coord>> {
        (0..size)
            .map(|i| match self {
                Orientation::Horizontal => top_left.offset(i, 0),
                Orientation::Vertical => top_left.offset(0, i),
            })
            .collect()
    }
}

/// Type of ship: name and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    size: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's size in cells.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Index of a ship inside its owner's roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub usize);

/// A single ship instance. Two ships of the same type are distinct values
/// with their own damage counter.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    id: ShipId,
    name: String,
    size: usize,
    fields_intact: usize,
}

impl Ship {
    pub fn new(id: ShipId, ship_type: ShipType) -> Self {
        Self {
            id,
            name: String::from(ship_type.name()),
            size: ship_type.size(),
            fields_intact: ship_type.size(),
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Segments that have not been hit yet.
    pub fn fields_intact(&self) -> usize {
        self.fields_intact
    }

    pub fn is_sunk(&self) -> bool {
        self.fields_intact == 0
    }

    /// Register a hit on one segment. Returns `true` if this hit sank the ship.
    pub fn register_hit(&mut self) -> bool {
        if self.fields_intact == 0 {
            return false;
        }
        self.fields_intact -= 1;
        self.fields_intact == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship({}, {}, {})", self.name, self.size, self.fields_intact)
    }
}

/// All ships a player owns for the whole game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    ships: Vec<Ship>,
}

impl Roster {
    /// One fresh ship per entry of `types`, numbered in order.
    pub fn new(types: impl IntoIterator<Item = ShipType>) -> Self {
        let ships = types
            .into_iter()
            .enumerate()
            .map(|(i, t)| Ship::new(ShipId(i), t))
            .collect();
        Self { ships }
    }

    pub fn get(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    pub fn get_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.ships.get_mut(id.0)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Intact segments summed over every ship.
    pub fn fields_intact(&self) -> usize {
        self.ships.iter().map(Ship::fields_intact).sum()
    }

    /// `true` when nothing is left afloat.
    pub fn all_sunk(&self) -> bool {
        self.fields_intact() == 0
    }
}
