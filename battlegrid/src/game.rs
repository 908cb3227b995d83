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
//! Implementation of the game as a whole: two boards driven through a placement phase
//! and an attack phase by a [`Session`].
//!
//! [`config`] describes what a new game looks like: the board size and the lengths of
//! the ships each player must place.
//!
//! [`session`] holds the state machine. Every request returns a typed result and also
//! queues [`Event`]s, so a presentation layer can either inspect the result directly or
//! drain the queue to update its display.

pub use self::{
    config::{BoardSize, ConfigError, GameConfig, ShipSet, MAX_HEIGHT, MAX_WIDTH},
    events::Event,
    inventory::Inventory,
    session::{AttackReport, Phase, Player, Rejection, Session, ShipPlaced},
};

pub mod config;
mod events;
mod inventory;
#[cfg(feature = "rng_gen")]
mod random;
pub mod session;
