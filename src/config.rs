use alloc::vec::Vec;

use crate::common::GameError;
use crate::ship::ShipType;

pub const GRID_SIZE: usize = 6;

/// Ship types handed to each player, with how many of each.
pub const FLEET: [(ShipType, usize); 3] = [
    (ShipType::new("Battleship", 4), 1),
    (ShipType::new("Destroyer", 3), 1),
    (ShipType::new("Submarine", 2), 2),
];

/// Total number of ship segments each player has to defend.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 2 * 2;

/// Grid size and fleet composition used when a game is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    pub grid_size: usize,
    pub fleet: Vec<(ShipType, usize)>,
}

impl Rules {
    /// Fails with `InvalidFleet` when a ship type has no cells or the fleet is empty.
    pub fn new(grid_size: usize, fleet: Vec<(ShipType, usize)>) -> Result<Self, GameError> {
        let rules = Self { grid_size, fleet };
        if rules.placement_order().any(|t| t.size() == 0) || rules.total_ship_cells() == 0 {
            return Err(GameError::InvalidFleet);
        }
        Ok(rules)
    }

    /// Ship types in placement order, one entry per ship instance.
    pub fn placement_order(&self) -> impl Iterator<Item = ShipType> + '_ {
        self.fleet
            .iter()
            .flat_map(|(ship_type, count)| core::iter::repeat(*ship_type).take(*count))
    }

    /// Sum of all ship sizes in the fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.placement_order().map(|t| t.size()).sum()
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            fleet: FLEET.to_vec(),
        }
    }
}
