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
//! Flat storage for the cells of a board.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::{Coordinate, Dimensions};

/// A single cell in the player's grid.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(super) struct GridCell {
    /// Index of the ship that occupies this cell, if any.
    pub(super) owner: Option<usize>,

    /// Whether this cell has been attacked.
    pub(super) attacked: bool,
}

/// Row-major grid of cells, sized by its [`Dimensions`].
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(super) struct Grid {
    /// Dimensions of this board.
    pub(super) dim: Dimensions,
    /// Cells that make up this board, indexed by [`Dimensions::linearize`].
    pub(super) cells: Box<[GridCell]>,
}

impl Grid {
    pub(super) fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| Default::default()).collect();
        Self { dim, cells }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&GridCell> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = GridCell;

    fn index(&self, coord: B) -> &Self::Output {
        let idx = self.dim.linearize(coord.borrow());
        &self.cells[idx]
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        let idx = self.dim.linearize(coord.borrow());
        &mut self.cells[idx]
    }
}
