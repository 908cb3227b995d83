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
//! Notifications for the presentation layer.

use crate::{
    board::Coordinate,
    game::{GameConfig, Phase, Player, Rejection},
    ships::Ship,
};

/// Something that happened in a [`Session`][crate::game::Session] that a presentation
/// layer may want to show. Events are queued in the order they happen.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A new game started with the given configuration.
    NewGame { config: GameConfig },

    /// A ship was placed on `player`'s board and may be drawn there.
    ShipRevealed { player: Player, ship: Ship },

    /// An attack on `target`'s board hit a ship.
    Hit { target: Player, coord: Coordinate },

    /// An attack on `target`'s board found open water.
    Miss { target: Player, coord: Coordinate },

    /// The attack sank `ship` on `target`'s board. Always preceded by a [`Event::Hit`].
    Sunk { target: Player, ship: Ship },

    /// The session moved to a new placement or attack phase.
    PhaseChanged(Phase),

    /// The game ended.
    GameOver { winner: Player },

    /// A request was refused; nothing changed.
    Rejected(Rejection),
}
