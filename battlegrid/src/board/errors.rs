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
//! Errors used by the [`Board`][crate::board::Board].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Coordinate, ships::Ship};

/// Reason why a ship could not be placed on a board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One or more of the ship's cells was already occupied.
    #[error("ships may not overlap")]
    Overlap,
}

/// Error caused when attempting to place a ship over another ship. The board is left
/// unchanged and the ship is handed back.
#[derive(Error)]
#[error("could not place {ship:?}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: Ship,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason and the rejected ship.
    pub(super) fn new(reason: CannotPlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the ship whose placement was attempted.
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Extract the ship from this error.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

/// Reason why a particular cell could not be attacked.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotAttackReason {
    /// The cell was attacked before; the caller should pick another one.
    #[error("that cell was already attacked")]
    Retry,
}

/// Error returned when trying to attack a cell. The board is left unchanged.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not attack cell {coord:?}: {reason}")]
pub struct AttackError {
    /// Reason why the cell could not be attacked.
    #[source]
    reason: CannotAttackReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl AttackError {
    /// Construct an attack error with the given reason for the specified cell.
    pub(super) fn new(reason: CannotAttackReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the attack failed.
    pub fn reason(&self) -> CannotAttackReason {
        self.reason
    }

    /// Get the coordinate of the attacked cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

/// Error returned when a cell label such as `B7` cannot be parsed.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum LabelError {
    /// The text was not a row letter followed by a column number.
    #[error("{0:?} is not a cell; use a row letter and a column number, like B7")]
    Malformed(String),

    /// The column number was 0 or greater than the largest labelled column.
    #[error("column {0} is outside 1-26")]
    Column(usize),
}
