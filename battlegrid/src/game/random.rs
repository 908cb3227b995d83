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
//! Random ship placement for players who would rather not place every ship by hand.

use log::warn;
use rand::Rng;

use crate::{
    game::{Phase, Player, Session},
    ships::{Orientation, Ship},
};

/// Random positions tried for each ship before giving up.
const ATTEMPTS: usize = 100;

impl Session {
    /// Place every ship left in the current player's inventory at random, largest first.
    /// Does nothing outside the placement phase.
    ///
    /// Returns the number of ships placed. Stops early if a ship cannot be fit after
    /// repeated attempts, leaving the remaining ships for the player to place.
    pub fn place_remaining_at_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let player = match self.phase() {
            Phase::Placing(player) => player,
            _ => return 0,
        };
        let mut lengths: Vec<usize> = self.inventory(player).iter().collect();
        lengths.reverse();

        let mut placed = 0;
        for length in lengths {
            match self.random_free_ship(rng, player, length) {
                Some(ship) => {
                    if self.place_ship(player, ship).is_err() {
                        break;
                    }
                    placed += 1;
                }
                None => {
                    warn!(
                        "could not find room for a ship of length {} for {}",
                        length, player
                    );
                    break;
                }
            }
        }
        placed
    }

    /// Pick a random ship of the given length that fits on the player's board without
    /// overlapping any placed ship.
    fn random_free_ship<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        player: Player,
        length: usize,
    ) -> Option<Ship> {
        let board = self.board(player);
        let dim = board.dimensions();
        for _ in 0..ATTEMPTS {
            let orientation: Orientation = rng.gen();
            // Largest anchor that keeps the ship on the board.
            let spans = match orientation {
                Orientation::Horizontal => dim
                    .width()
                    .checked_sub(length)
                    .map(|x| (x, dim.height() - 1)),
                Orientation::Vertical => dim
                    .height()
                    .checked_sub(length)
                    .map(|y| (dim.width() - 1, y)),
            };
            let (span_x, span_y) = match spans {
                Some(spans) => spans,
                None => continue,
            };
            let ship = Ship::new(
                orientation,
                rng.gen_range(0, span_x + 1),
                rng.gen_range(0, span_y + 1),
                length,
            );
            let free = ship
                .cells()
                .all(|coord| board.cell(coord).map_or(false, |cell| cell.ship().is_none()));
            if free {
                return Some(ship);
            }
        }
        None
    }
}
