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
//! Types used for defining ships and the cells they cover.

use crate::board::Coordinate;

/// Axis a ship extends along from its anchor cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// The ship covers `(x + i, y)`.
    Horizontal,
    /// The ship covers `(x, y + i)`.
    Vertical,
}

impl Orientation {
    /// Step `offset` cells along this orientation from `coord`. Returns `None` on overflow.
    fn step(self, coord: Coordinate, offset: usize) -> Option<Coordinate> {
        match self {
            Orientation::Horizontal => coord
                .x
                .checked_add(offset)
                .map(|x| Coordinate::new(x, coord.y)),
            Orientation::Vertical => coord
                .y
                .checked_add(offset)
                .map(|y| Coordinate::new(coord.x, y)),
        }
    }
}

/// An immutable, axis-aligned ship: an anchor cell, an orientation and a length.
///
/// The ship covers `length` cells starting at the anchor and extending right
/// ([`Horizontal`][Orientation::Horizontal]) or down ([`Vertical`][Orientation::Vertical]).
/// A ship knows nothing about any particular board; whether it fits is decided by
/// [`Dimensions::fits`][crate::board::Dimensions::fits].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    orientation: Orientation,
    anchor: Coordinate,
    length: usize,
}

impl Ship {
    /// Construct a ship anchored at `(x, y)`. Panics if `length` is 0.
    pub fn new(orientation: Orientation, x: usize, y: usize, length: usize) -> Self {
        assert!(length > 0, "ship length must be nonzero");
        Self {
            orientation,
            anchor: Coordinate::new(x, y),
            length,
        }
    }

    /// Construct the ship spanning the two end cells `a` and `b`, inclusive, in either
    /// order. Returns `None` if the cells share neither a column nor a row.
    ///
    /// Cells that share a column produce a vertical ship, so a single cell yields a
    /// vertical ship of length 1.
    pub fn from_endpoints(a: Coordinate, b: Coordinate) -> Option<Self> {
        if a.x == b.x {
            let (top, bottom) = if a.y <= b.y { (a.y, b.y) } else { (b.y, a.y) };
            Some(Self::new(Orientation::Vertical, a.x, top, bottom - top + 1))
        } else if a.y == b.y {
            let (left, right) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
            Some(Self::new(Orientation::Horizontal, left, a.y, right - left + 1))
        } else {
            None
        }
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The first cell of the ship: its top-most or left-most cell.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    /// Number of cells the ship covers.
    pub fn len(&self) -> usize {
        self.length
    }

    /// The last cell of the ship. Returns `None` if it would overflow `usize`.
    pub fn end(&self) -> Option<Coordinate> {
        self.orientation.step(self.anchor, self.length - 1)
    }

    /// Iterate over the cells covered by this ship, starting at the anchor.
    ///
    /// Panics during iteration if the ship extends past `usize::MAX`; callers should check
    /// the ship against the board's [`Dimensions`][crate::board::Dimensions] first.
    pub fn cells(&self) -> Cells {
        Cells {
            ship: *self,
            next: 0,
        }
    }

    /// Returns true if this ship covers the given cell.
    pub fn covers(&self, coord: Coordinate) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                coord.y == self.anchor.y
                    && coord.x >= self.anchor.x
                    && coord.x - self.anchor.x < self.length
            }
            Orientation::Vertical => {
                coord.x == self.anchor.x
                    && coord.y >= self.anchor.y
                    && coord.y - self.anchor.y < self.length
            }
        }
    }
}

/// Iterator over the cells of a [`Ship`].
#[derive(Debug, Clone)]
pub struct Cells {
    ship: Ship,
    next: usize,
}

impl Iterator for Cells {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.next >= self.ship.length {
            return None;
        }
        let coord = self
            .ship
            .orientation
            .step(self.ship.anchor, self.next)
            .expect("ship extends past usize::MAX");
        self.next += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.ship.length - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cells {}

#[cfg(feature = "rng_gen")]
mod rng_gen {
    use rand::{
        distributions::{Distribution, Standard},
        Rng,
    };

    use super::Orientation;

    impl Distribution<Orientation> for Standard {
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
            if rng.gen() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            }
        }
    }
}
