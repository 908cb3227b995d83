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
use thiserror::Error;

use crate::board::Coordinate;

/// Why a session request was refused. A refused request never changes the session.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    /// The request does not match the current phase, or came from the player whose turn
    /// it is not.
    #[error("that move is not allowed right now")]
    WrongPhase,

    /// No ship of this length is left to place.
    #[error("there is no ship of length {0} left to place")]
    InvalidLength(usize),

    /// The ship or cell is not on the board.
    #[error("that is not on the board")]
    OutOfBounds,

    /// The ship would cover a cell that already holds a ship.
    #[error("ships may not overlap")]
    Overlap,

    /// The cell was attacked before.
    #[error("you've already attacked {}", .0.label())]
    Retry(Coordinate),
}
