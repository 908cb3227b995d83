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
//! The session state machine: two players, their boards and ship inventories, and the
//! phase that decides who may do what next.
//!
//! A session always moves through the same phases:
//!
//! 1. [`Phase::Placing`] for [`Player::P2`], then for [`Player::P1`]. Each player places
//!    every ship in their inventory on their own board.
//! 2. [`Phase::Attacking`], starting with [`Player::P1`]. Players alternate attacking a
//!    cell on the opponent's board, whatever the outcome.
//! 3. [`Phase::GameOver`] once one player has sunk every ship of the other. Only
//!    [`Session::new_game`] leaves this phase.

use std::{
    collections::{vec_deque, VecDeque},
    fmt,
};

use log::{debug, info};

use crate::{
    board::{AttackOutcome, Board, Coordinate},
    game::{Event, GameConfig, Inventory},
    ships::Ship,
};

pub use self::errors::Rejection;

mod errors;

/// Player ID. Either `P1` or `P2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Both players.
    pub const ALL: [Player; 2] = [Player::P1, Player::P2];

    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Player::P1 => "Player1",
            Player::P2 => "Player2",
        })
    }
}

/// Current phase of a [`Session`], including whose turn it is.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The player is placing ships on their own board.
    Placing(Player),
    /// The player is attacking their opponent's board.
    Attacking(Player),
    /// The game is over.
    GameOver { winner: Player },
}

impl Phase {
    /// The player allowed to act, or `None` once the game is over.
    pub fn active_player(self) -> Option<Player> {
        match self {
            Phase::Placing(player) | Phase::Attacking(player) => Some(player),
            Phase::GameOver { .. } => None,
        }
    }
}

/// Result of a successful [`Session::place_ship`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShipPlaced {
    /// Owner of the board the ship was placed on.
    pub player: Player,
    /// The placed ship.
    pub ship: Ship,
    /// Index of the ship on its board.
    pub index: usize,
    /// Phase after the placement.
    pub phase: Phase,
}

/// Result of a successful [`Session::attack`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttackReport {
    /// Player who attacked.
    pub attacker: Player,
    /// Player whose board was attacked.
    pub target: Player,
    /// Attacked cell.
    pub coord: Coordinate,
    /// What the attack found.
    pub outcome: AttackOutcome,
    /// Phase after the attack.
    pub phase: Phase,
}

/// One player's part of the session.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Side {
    /// The player's own board.
    board: Board,
    /// Ship lengths the player has yet to place.
    inventory: Inventory,
    /// Ships placed and not yet sunk.
    ships_alive: usize,
}

impl Side {
    fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(config.dimensions()),
            inventory: config.inventory(),
            ships_alive: 0,
        }
    }
}

/// A two-player game from the first placement to game over.
///
/// All requests run to completion. A refused request returns `Err` with a [`Rejection`],
/// queues [`Event::Rejected`] and changes nothing else.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    /// Settings of the game in progress.
    config: GameConfig,

    /// Per-player state, indexed by [`Player::index`].
    sides: [Side; 2],

    /// Current phase and whose turn it is.
    phase: Phase,

    /// Events not yet drained by the presentation layer.
    events: VecDeque<Event>,
}

impl Session {
    /// Start a session with a new game using the given configuration.
    pub fn new(config: GameConfig) -> Self {
        let mut session = Self {
            sides: [Side::new(&config), Side::new(&config)],
            config: config.clone(),
            phase: Phase::Placing(Player::P2),
            events: VecDeque::new(),
        };
        session.new_game(config);
        session
    }

    /// Throw away the current game and start a new one. Both boards are emptied, both
    /// inventories refilled and [`Player::P2`] places first. Pending events are discarded.
    pub fn new_game(&mut self, config: GameConfig) {
        info!("new game: {}", config);
        self.sides = [Side::new(&config), Side::new(&config)];
        self.events.clear();
        self.events.push_back(Event::NewGame {
            config: config.clone(),
        });
        self.config = config;
        self.transition(Phase::Placing(Player::P2));
    }

    /// Start a new game with the same configuration as the current one.
    pub fn restart(&mut self) {
        self.new_game(self.config.clone());
    }

    /// Place a ship on `player`'s own board. Allowed only while that player is placing.
    ///
    /// The ship's length must still be in the player's inventory, the ship must fit on
    /// the board and must not overlap a ship already placed. When the last ship of the
    /// inventory is placed, [`Player::P2`] hands over to [`Player::P1`], and
    /// [`Player::P1`] starts the attack phase.
    pub fn place_ship(&mut self, player: Player, ship: Ship) -> Result<ShipPlaced, Rejection> {
        if self.phase != Phase::Placing(player) {
            return self.reject(Rejection::WrongPhase);
        }
        let side = &self.sides[player.index()];
        if !side.inventory.contains(ship.len()) {
            return self.reject(Rejection::InvalidLength(ship.len()));
        }
        if !side.board.dimensions().fits(&ship) {
            return self.reject(Rejection::OutOfBounds);
        }

        let side = &mut self.sides[player.index()];
        let placed = side.board.place(ship).map(|placed| placed.index());
        let index = match placed {
            Ok(index) => index,
            Err(err) => {
                debug!("{} {}", player, err);
                return self.reject(Rejection::Overlap);
            }
        };
        side.inventory.take(ship.len());
        side.ships_alive += 1;
        let finished = side.inventory.is_empty();
        debug!("{} placed {:?}, remaining: [{}]", player, ship, side.inventory);
        self.events.push_back(Event::ShipRevealed { player, ship });

        if finished {
            self.transition(match player {
                Player::P2 => Phase::Placing(Player::P1),
                Player::P1 => Phase::Attacking(Player::P1),
            });
        }
        Ok(ShipPlaced {
            player,
            ship,
            index,
            phase: self.phase,
        })
    }

    /// Attack a cell on the opponent's board. Allowed only on `player`'s turn of the
    /// attack phase.
    ///
    /// After a miss or a hit the turn passes to the opponent. Sinking the opponent's last
    /// ship ends the game with `player` as the winner.
    pub fn attack(
        &mut self,
        player: Player,
        coord: Coordinate,
    ) -> Result<AttackReport, Rejection> {
        if self.phase != Phase::Attacking(player) {
            return self.reject(Rejection::WrongPhase);
        }
        let target = player.opponent();
        let side = &mut self.sides[target.index()];
        if !side.board.dimensions().contains(coord) {
            return self.reject(Rejection::OutOfBounds);
        }
        let outcome = match side.board.attack(coord) {
            Ok(outcome) => outcome,
            Err(err) => return self.reject(Rejection::Retry(err.coord())),
        };
        debug!("{} attacked {} at {:?}: {:?}", player, target, coord, outcome);

        match outcome {
            AttackOutcome::Miss => self.events.push_back(Event::Miss { target, coord }),
            AttackOutcome::Hit => self.events.push_back(Event::Hit { target, coord }),
            AttackOutcome::Sunk(ship) => {
                side.ships_alive -= 1;
                self.events.push_back(Event::Hit { target, coord });
                self.events.push_back(Event::Sunk { target, ship });
            }
        }

        let defeated = self.sides[target.index()].ships_alive == 0;
        self.transition(if defeated {
            Phase::GameOver { winner: player }
        } else {
            Phase::Attacking(target)
        });
        Ok(AttackReport {
            attacker: player,
            target,
            coord,
            outcome,
            phase: self.phase,
        })
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player allowed to act, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        self.phase.active_player()
    }

    /// The winner, if the game is over.
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Configuration of the game in progress.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The given player's own board.
    pub fn board(&self, player: Player) -> &Board {
        &self.sides[player.index()].board
    }

    /// Ship lengths the given player still has to place.
    pub fn inventory(&self, player: Player) -> &Inventory {
        &self.sides[player.index()].inventory
    }

    /// Number of the given player's ships that are placed and not sunk.
    pub fn ships_alive(&self, player: Player) -> usize {
        self.sides[player.index()].ships_alive
    }

    /// Events not yet drained, oldest first.
    pub fn pending_events(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Remove and return all queued events, oldest first.
    pub fn drain_events(&mut self) -> vec_deque::Drain<Event> {
        self.events.drain(..)
    }

    /// Move to `phase` and announce it.
    fn transition(&mut self, phase: Phase) {
        debug!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.events.push_back(match phase {
            Phase::GameOver { winner } => {
                info!("game over, {} wins", winner);
                Event::GameOver { winner }
            }
            phase => Event::PhaseChanged(phase),
        });
    }

    /// Record a refused request.
    fn reject<T>(&mut self, rejection: Rejection) -> Result<T, Rejection> {
        debug!("rejected in {:?}: {}", self.phase, rejection);
        self.events.push_back(Event::Rejected(rejection));
        Err(rejection)
    }
}

impl Default for Session {
    /// A session running the classic game.
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
