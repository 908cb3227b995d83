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
//! Text rendering of boards and game events.

use std::fmt;

use enumflags2::BitFlags;

use battlegrid::{
    board::{
        labels::{column_label, row_label},
        Board, CellState,
    },
    game::{Event, Phase, Rejection, Session},
};

/// Display helper that prints a board as a labelled grid.
///
/// A hidden view shows only what the opponent has learned by attacking: misses, hits
/// and sunk ships. A revealed view also shows the ships nobody has hit yet.
pub struct BoardView<'a> {
    board: &'a Board,
    reveal: bool,
}

impl<'a> BoardView<'a> {
    pub fn revealed(board: &'a Board) -> Self {
        Self {
            board,
            reveal: true,
        }
    }

    pub fn hidden(board: &'a Board) -> Self {
        Self {
            board,
            reveal: false,
        }
    }
}

/// Symbol for a single cell.
fn symbol(state: BitFlags<CellState>, reveal: bool) -> &'static str {
    let attacked = state.contains(CellState::Attacked);
    if state.contains(CellState::Sunk) {
        "X"
    } else if state.contains(CellState::Occupied) {
        if attacked {
            "x"
        } else if reveal {
            "#"
        } else {
            "~"
        }
    } else if attacked {
        "o"
    } else {
        "~"
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.board.dimensions().width() {
            write!(f, "{:^3}", column_label(x).unwrap_or(x + 1))?;
        }
        writeln!(f)?;
        for (y, row) in self.board.iter_rows().enumerate() {
            write!(f, "{:>2} ", row_label(y).unwrap_or('?'))?;
            for cell in row {
                write!(f, "{:^3}", symbol(cell.state(), self.reveal))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Status line for an event drained from `session`.
pub fn describe(event: &Event, session: &Session) -> String {
    match event {
        Event::NewGame { config } => format!("New game: {}.", config),
        Event::ShipRevealed { player, ship } => {
            format!("{} placed a ship of length {}.", player, ship.len())
        }
        Event::Hit { coord, .. } => format!("{}: hit!", coord.label()),
        Event::Miss { coord, .. } => format!("{}: miss.", coord.label()),
        Event::Sunk { target, ship } => {
            format!("{} lost their ship of length {}!", target, ship.len())
        }
        Event::PhaseChanged(Phase::Placing(player)) => format!(
            "{}, place your ships. Remaining lengths: {}",
            player,
            session.inventory(*player)
        ),
        Event::PhaseChanged(Phase::Attacking(player)) => {
            format!("{}, choose a cell to attack.", player)
        }
        Event::PhaseChanged(Phase::GameOver { winner }) | Event::GameOver { winner } => {
            format!("Game over, {} wins!", winner)
        }
        Event::Rejected(rejection) => {
            let mut status = format!("Invalid move: {}.", rejection);
            let shows_inventory =
                matches!(rejection, Rejection::InvalidLength(_) | Rejection::Overlap);
            if let (true, Phase::Placing(player)) = (shows_inventory, session.phase()) {
                status.push_str(&format!(
                    " Remaining lengths: {}",
                    session.inventory(player)
                ));
            }
            status
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use battlegrid::{
        board::{Coordinate, Dimensions},
        game::{GameConfig, Player},
        ships::{Orientation, Ship},
    };

    fn small_board() -> Board {
        let mut board = Board::new(Dimensions::new(3, 2));
        board
            .place(Ship::new(Orientation::Horizontal, 0, 0, 2))
            .unwrap();
        board.attack(Coordinate::new(0, 0)).unwrap();
        board.attack(Coordinate::new(2, 1)).unwrap();
        board
    }

    #[test]
    fn revealed_board_shows_ships() {
        let board = small_board();
        let expected = String::new()
            + "    1  2  3 \n"
            + " A  x  #  ~ \n"
            + " B  ~  ~  o \n";
        assert_eq!(BoardView::revealed(&board).to_string(), expected);
    }

    #[test]
    fn hidden_board_shows_only_attacks() {
        let mut board = small_board();
        let expected = String::new()
            + "    1  2  3 \n"
            + " A  x  ~  ~ \n"
            + " B  ~  ~  o \n";
        assert_eq!(BoardView::hidden(&board).to_string(), expected);

        board.attack(Coordinate::new(1, 0)).unwrap();
        let expected = String::new()
            + "    1  2  3 \n"
            + " A  X  X  ~ \n"
            + " B  ~  ~  o \n";
        assert_eq!(BoardView::hidden(&board).to_string(), expected);
    }

    #[test]
    fn rejected_placement_lists_remaining_lengths() {
        let mut session = Session::new(GameConfig::new(5, 5, vec![2, 3, 3]).unwrap());
        session
            .place_ship(Player::P2, Ship::new(Orientation::Horizontal, 0, 0, 3))
            .unwrap();
        let _ = session.place_ship(Player::P2, Ship::new(Orientation::Horizontal, 0, 1, 4));
        let events: Vec<Event> = session.drain_events().collect();
        let last = events.last().unwrap();
        assert_eq!(
            describe(last, &session),
            "Invalid move: there is no ship of length 4 left to place. \
             Remaining lengths: 2, 3"
        );
    }

    #[test]
    fn attack_statuses() {
        let session = Session::new(GameConfig::new(5, 5, vec![2]).unwrap());
        let coord = Coordinate::new(6, 1);
        assert_eq!(
            describe(&Event::Miss { target: Player::P2, coord }, &session),
            "B7: miss."
        );
        assert_eq!(
            describe(&Event::GameOver { winner: Player::P1 }, &session),
            "Game over, Player1 wins!"
        );
    }
}
