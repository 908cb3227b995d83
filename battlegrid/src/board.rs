// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Types that make up a single player's board.

use enumflags2::BitFlags;
use log::trace;

use crate::ships::Ship;

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    dimensions::Dimensions,
    errors::{AttackError, CannotAttackReason, CannotPlaceReason, LabelError, PlaceError},
    labels::{parse_cell, CellLabel, MAX_LABELS},
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;
pub mod labels;

/// A placed ship together with the number of hits it can still take.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct ShipEntry {
    ship: Ship,
    hits_remaining: usize,
}

/// Handle to a placed ship that allows getting information about its status.
#[derive(Debug, Copy, Clone)]
pub struct ShipRef<'a> {
    /// Index of the ship in placement order.
    index: usize,

    /// Back ref to the ship's entry in the board.
    entry: &'a ShipEntry,
}

impl<'a> ShipRef<'a> {
    /// Index of this ship on its board. Ships are numbered in placement order and keep
    /// their index for the lifetime of the board.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The placed ship.
    pub fn ship(&self) -> &'a Ship {
        &self.entry.ship
    }

    /// Number of cells of this ship that have not been attacked yet.
    pub fn hits_remaining(&self) -> usize {
        self.entry.hits_remaining
    }

    /// Check if this ship has been sunk.
    pub fn sunk(&self) -> bool {
        self.entry.hits_remaining == 0
    }
}

/// Summary of a cell for renderers.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum CellState {
    /// A ship occupies the cell.
    Occupied = 0b001,
    /// The cell has been attacked.
    Attacked = 0b010,
    /// The ship occupying the cell has been sunk.
    Sunk = 0b100,
}

/// Reference to a particular cell in the grid.
#[derive(Debug, Copy, Clone)]
pub struct CellRef<'a> {
    /// Coordinate of this cell.
    coord: Coordinate,

    /// Whether this cell was attacked.
    attacked: bool,

    /// Reference to the ship that occupies this cell if any.
    ship: Option<ShipRef<'a>>,
}

impl<'a> CellRef<'a> {
    /// The grid coordinate of this cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Whether this cell has been attacked previously.
    pub fn attacked(&self) -> bool {
        self.attacked
    }

    /// The ship reference for the ship that occupies this cell, if any.
    pub fn ship(&self) -> Option<ShipRef<'a>> {
        self.ship
    }

    /// Flags describing this cell.
    pub fn state(&self) -> BitFlags<CellState> {
        let mut state = BitFlags::empty();
        if self.attacked {
            state |= CellState::Attacked;
        }
        if let Some(ship) = self.ship {
            state |= CellState::Occupied;
            if ship.sunk() {
                state |= CellState::Sunk;
            }
        }
        state
    }
}

/// Result of an attack on a cell that had not been attacked before.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AttackOutcome {
    /// The cell was empty.
    Miss,
    /// A ship was hit but it still has unattacked cells.
    Hit,
    /// The attack hit the last unattacked cell of the given ship.
    Sunk(Ship),
}

/// Represents a single player's board: where their ships are, how much damage each has
/// taken and which cells the opponent has already attacked.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    /// Grid of cells, each optionally owned by a ship.
    grid: Grid,

    /// Ships in placement order. A cell's owner is an index into this list.
    ships: Vec<ShipEntry>,
}

impl Board {
    /// Construct an empty board with the given [`Dimensions`].
    pub fn new(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            ships: Vec::new(),
        }
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Attempts to place the ship. If any of its cells is already occupied, returns `Err`
    /// with the ship and leaves the board untouched. Otherwise records the ship and
    /// returns a reference to it.
    ///
    /// Panics if the ship does not fit on the board.
    pub fn place(&mut self, ship: Ship) -> Result<ShipRef, PlaceError> {
        assert!(
            self.grid.dim.fits(&ship),
            "{:?} is out of bounds for {:?}",
            ship,
            self.grid.dim
        );
        if ship.cells().any(|coord| self.grid[coord].owner.is_some()) {
            return Err(PlaceError::new(CannotPlaceReason::Overlap, ship));
        }
        // Already ensured that every cell is on the board and free.
        let index = self.ships.len();
        for coord in ship.cells() {
            self.grid[coord].owner = Some(index);
        }
        self.ships.push(ShipEntry {
            ship,
            hits_remaining: ship.len(),
        });
        trace!("placed ship {} at {:?}", index, ship);
        Ok(ShipRef {
            index,
            entry: &self.ships[index],
        })
    }

    /// Attack a cell. Attacking a cell a second time fails with
    /// [`CannotAttackReason::Retry`] and changes nothing.
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn attack(&mut self, coord: Coordinate) -> Result<AttackOutcome, AttackError> {
        let cell = &mut self.grid[coord];
        if cell.attacked {
            return Err(AttackError::new(CannotAttackReason::Retry, coord));
        }
        cell.attacked = true;
        let outcome = match cell.owner {
            None => AttackOutcome::Miss,
            Some(index) => {
                let entry = &mut self.ships[index];
                entry.hits_remaining -= 1;
                if entry.hits_remaining == 0 {
                    AttackOutcome::Sunk(entry.ship)
                } else {
                    AttackOutcome::Hit
                }
            }
        };
        trace!("attack at {:?}: {:?}", coord, outcome);
        Ok(outcome)
    }

    /// Get the ship with the given placement index if it exists.
    pub fn ship(&self, index: usize) -> Option<ShipRef> {
        self.ships
            .get(index)
            .map(|entry| ShipRef { index, entry })
    }

    /// Get an iterator over all ships on this board, in placement order.
    pub fn iter_ships(&self) -> impl Iterator<Item = ShipRef> {
        self.ships
            .iter()
            .enumerate()
            .map(|(index, entry)| ShipRef { index, entry })
    }

    /// Get a reference to the cell at the given coordinate. Returns None if the
    /// coordinate is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellRef> {
        self.grid.get(coord).map(|cell| CellRef {
            coord,
            attacked: cell.attacked,
            ship: cell.owner.and_then(|index| self.ship(index)),
        })
    }

    /// Get an iterator over the rows of this board. Each row is an iterator over the
    /// cells of that row.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = CellRef<'a>>> {
        self.grid
            .dim
            .iter_coordinates()
            .map(move |row| row.filter_map(move |coord| self.cell(coord)))
    }

    /// Number of placed ships that have not been sunk.
    pub fn ships_afloat(&self) -> usize {
        self.ships
            .iter()
            .filter(|entry| entry.hits_remaining > 0)
            .count()
    }

    /// Returns true if at least one ship was placed and every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships_afloat() == 0
    }

    /// Number of cells that have been attacked.
    pub fn attacked_count(&self) -> usize {
        self.grid.cells.iter().filter(|cell| cell.attacked).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::Orientation;

    fn board() -> Board {
        Board::new(Dimensions::new(10, 10))
    }

    #[test]
    fn place_assigns_every_cell() {
        let mut board = board();
        let ship = Ship::new(Orientation::Vertical, 4, 2, 3);
        let placed = board.place(ship).unwrap();
        assert_eq!(placed.index(), 0);
        assert_eq!(placed.hits_remaining(), 3);
        assert_eq!(*placed.ship(), ship);
        for y in 2..5 {
            let cell = board.cell(Coordinate::new(4, y)).unwrap();
            assert_eq!(cell.ship().map(|s| s.index()), Some(0));
            assert_eq!(cell.state(), BitFlags::from(CellState::Occupied));
        }
        assert!(board.cell(Coordinate::new(4, 5)).unwrap().ship().is_none());
    }

    #[test]
    fn overlap_is_atomic() {
        let mut board = board();
        board
            .place(Ship::new(Orientation::Horizontal, 0, 0, 2))
            .unwrap();
        let before = board.clone();
        let attempt = Ship::new(Orientation::Vertical, 1, 0, 4);
        let err = board.place(attempt).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::Overlap);
        assert_eq!(err.into_ship(), attempt);
        assert_eq!(board, before);
    }

    #[test]
    fn cell_flags_track_damage() {
        let mut board = board();
        board
            .place(Ship::new(Orientation::Horizontal, 0, 0, 2))
            .unwrap();
        board.attack(Coordinate::new(0, 0)).unwrap();
        assert_eq!(
            board.cell(Coordinate::new(0, 0)).unwrap().state(),
            CellState::Occupied | CellState::Attacked
        );
        board.attack(Coordinate::new(1, 0)).unwrap();
        assert_eq!(
            board.cell(Coordinate::new(1, 0)).unwrap().state(),
            CellState::Occupied | CellState::Attacked | CellState::Sunk
        );
        board.attack(Coordinate::new(5, 5)).unwrap();
        assert_eq!(
            board.cell(Coordinate::new(5, 5)).unwrap().state(),
            BitFlags::from(CellState::Attacked)
        );
        assert!(board.cell(Coordinate::new(9, 9)).unwrap().state().is_empty());
    }

    #[test]
    fn iter_rows_covers_board() {
        let board = Board::new(Dimensions::new(4, 3));
        let rows: Vec<Vec<Coordinate>> = board
            .iter_rows()
            .map(|row| row.map(|cell| cell.coord()).collect())
            .collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 4));
        assert_eq!(rows[2][3], Coordinate::new(3, 2));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn place_out_of_bounds_panics() {
        board()
            .place(Ship::new(Orientation::Horizontal, 8, 0, 3))
            .unwrap();
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn attack_out_of_bounds_panics() {
        let _ = board().attack(Coordinate::new(0, 10));
    }
}
