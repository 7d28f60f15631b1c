//! Grid cell addresses.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::common::GameError;

/// Zero-based cell address. Bounds are checked by the grid, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Build from a column letter (`'A'` is column 0) and a 1-based row.
    pub fn from_letter(column: char, row: usize) -> Result<Self, GameError> {
        let column = column.to_ascii_uppercase();
        if !column.is_ascii_uppercase() || row == 0 {
            return Err(GameError::InvalidCoord(alloc::format!("{}{}", column, row)));
        }
        Ok(Self {
            x: (column as u8 - b'A') as usize,
            y: row - 1,
        })
    }

    /// The cell `dx` columns right and `dy` rows down, `None` on overflow.
    pub(crate) fn offset(self, dx: usize, dy: usize) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.y.checked_add(1) {
            Some(row) if self.x < 26 => write!(f, "{}{}", (b'A' + self.x as u8) as char, row),
            // no letter or row number left for this cell
            _ => write!(f, "[{},{}]", self.x, self.y),
        }
    }
}

impl FromStr for Coord {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidCoord(s.to_string());
        let s_trim = s.trim();
        let mut chars = s_trim.chars();
        let column = chars.next().ok_or_else(invalid)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let row: usize = digits.parse().map_err(|_| invalid())?;
        Coord::from_letter(column, row).map_err(|_| invalid())
    }
}

/// Joins coordinates the way players read them: `A1, B1 and C1`.
pub fn join_coords(coords: &[Coord]) -> String {
    match coords {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let head: alloc::vec::Vec<String> = init.iter().map(|c| c.to_string()).collect();
            alloc::format!("{} and {}", head.join(", "), last)
        }
    }
}
