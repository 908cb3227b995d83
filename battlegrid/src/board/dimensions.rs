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
//! Rectangular board dimensions and the row-major mapping between coordinates and cell
//! indexes.

use std::borrow::Borrow;

use crate::{board::Coordinate, ships::Ship};

/// Width and height of a board. Cells are stored row-major, so the cell at `(x, y)`
/// lives at index `y * width + x`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// Width of the board. This cooresponds to the `x` [`Coordinate`].
    width: usize,
    /// Height of the board. This cooresponds to the `y` [`Coordinate`].
    height: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified width and height.
    /// Panics if `width * height` exceeds `usize::max_value()` or if `width` or `height` is 0.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Some(dim) => dim,
            None => {
                if width == 0 || height == 0 {
                    panic!("Dimensions must be nonzero, got {}x{}", width, height);
                } else {
                    panic!(
                        "Dimensions too large: {} * {} > {}",
                        width,
                        height,
                        usize::max_value()
                    );
                }
            }
        }
    }

    /// Create new [`Dimensions`] with the specified width and height.
    /// Returns `None` if `width * height` exceeds `usize::max_value()` or if `width` or
    /// `height` is 0.
    pub fn try_new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            width
                .checked_mul(height)
                .map(|_| Self { width, height })
        }
    }

    /// Get the width of these [`Dimensions`].
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height of these [`Dimensions`].
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells. Used to allocate storage for the board.
    pub fn total_size(&self) -> usize {
        self.width * self.height
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains<B: Borrow<Coordinate>>(&self, coord: B) -> bool {
        let c = coord.borrow();
        c.x < self.width && c.y < self.height
    }

    /// Returns true if every cell of the ship lies on the board.
    pub fn fits(&self, ship: &Ship) -> bool {
        // `end` is None when the ship's extent overflows usize.
        ship.end()
            .map_or(false, |end| self.contains(ship.anchor()) && self.contains(end))
    }

    /// Convert a coordinate to a linear index.
    /// Panics if the coordinate is out of range for the dimensions.
    pub fn linearize(&self, coord: &Coordinate) -> usize {
        match self.try_linearize(coord) {
            Some(v) => v,
            None => panic!("{:?} is out of bounds for {:?}", coord, self),
        }
    }

    /// Convert a coordinate to a linear index.
    /// Returns `None` if the coordinate is out of range for the dimensions.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y * self.width + coord.x)
        } else {
            None
        }
    }

    /// Get back a coordinate from a linearized index. Panics if idx is >= total_size.
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        assert!(
            idx < self.total_size(),
            "index {} is out of bounds for {:?}",
            idx,
            self
        );
        Coordinate {
            x: idx % self.width,
            y: idx / self.width,
        }
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let width = self.width;
        (0..self.height).map(move |y| (0..width).map(move |x| Coordinate { x, y }))
    }
}

impl Default for Dimensions {
    /// Construct the default dimensions, a 10x10 board.
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linearize_is_row_major() {
        let dim = Dimensions::new(9, 16);
        assert_eq!(dim.linearize(&Coordinate::new(0, 0)), 0);
        assert_eq!(dim.linearize(&Coordinate::new(8, 0)), 8);
        assert_eq!(dim.linearize(&Coordinate::new(0, 1)), 9);
        assert_eq!(dim.linearize(&Coordinate::new(8, 15)), 143);
        assert_eq!(dim.try_linearize(&Coordinate::new(9, 0)), None);
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 16)), None);
    }

    #[test]
    fn un_linearize_inverts_linearize() {
        let dim = Dimensions::new(7, 3);
        for idx in 0..dim.total_size() {
            assert_eq!(dim.linearize(&dim.un_linearize(idx)), idx);
        }
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert_eq!(Dimensions::try_new(0, 5), None);
        assert_eq!(Dimensions::try_new(5, 0), None);
        assert_eq!(Dimensions::try_new(usize::max_value(), 2), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn linearize_panics_out_of_bounds() {
        Dimensions::new(10, 10).linearize(&Coordinate::new(10, 0));
    }
}
