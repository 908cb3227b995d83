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

//! Headless implementation of a two-player grid battle game.
//!
//! The crate is split into three layers:
//!
//! - [`ships`] defines the immutable [`Ship`][ships::Ship] descriptor.
//! - [`board`] owns a single player's grid: which cells are occupied by which ship, how
//!   many hits each ship can still take, and which cells were already attacked.
//! - [`game`] ties two boards together into a [`Session`][game::Session] that enforces
//!   the placement/attack phases and turn order, and reports every outcome as an
//!   [`Event`][game::Event] for a presentation layer to render.
//!
//! ```
//! use battlegrid::{
//!     board::Coordinate,
//!     game::{GameConfig, Phase, Player, Session},
//!     ships::{Orientation, Ship},
//! };
//!
//! let config = GameConfig::new(4, 4, vec![2]).unwrap();
//! let mut session = Session::new(config);
//! assert_eq!(session.phase(), Phase::Placing(Player::P2));
//!
//! session.place_ship(Player::P2, Ship::new(Orientation::Horizontal, 0, 0, 2)).unwrap();
//! session.place_ship(Player::P1, Ship::new(Orientation::Vertical, 3, 2, 2)).unwrap();
//! assert_eq!(session.phase(), Phase::Attacking(Player::P1));
//!
//! session.attack(Player::P1, Coordinate::new(0, 0)).unwrap();
//! assert_eq!(session.phase(), Phase::Attacking(Player::P2));
//! ```

pub mod board;
pub mod game;
pub mod ships;
