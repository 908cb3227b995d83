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
use proptest::prelude::*;

use battlegrid::{
    board::Coordinate,
    game::{GameConfig, Phase, Player, Rejection, Session},
    ships::{Orientation, Ship},
};

const SIZE: usize = 5;

/// Both players with ships of length 1, 2 and 3 in the top rows, P1 to attack.
fn staircase() -> Session {
    let mut session = Session::new(GameConfig::new(SIZE, SIZE, vec![1, 2, 3]).unwrap());
    for &player in &[Player::P2, Player::P1] {
        for len in 1..=3 {
            session
                .place_ship(player, Ship::new(Orientation::Horizontal, 0, len - 1, len))
                .unwrap();
        }
    }
    session
}

fn check_counts(session: &Session) {
    for &player in &Player::ALL {
        assert_eq!(
            session.ships_alive(player),
            session.board(player).ships_afloat()
        );
    }
}

#[test]
fn sweeping_every_cell_ends_the_game() {
    let mut session = staircase();
    let cells: Vec<Coordinate> = (0..SIZE)
        .flat_map(|y| (0..SIZE).map(move |x| Coordinate::new(x, y)))
        .collect();
    for coord in cells {
        for &player in &[Player::P1, Player::P2] {
            if session.current_player() == Some(player) {
                session.attack(player, coord).unwrap();
            }
        }
    }
    // P1 attacks first, so P1 sinks the last ship first.
    assert_eq!(session.winner(), Some(Player::P1));
    assert_eq!(session.ships_alive(Player::P2), 0);
    assert_eq!(session.ships_alive(Player::P1), 1);
    check_counts(&session);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn alive_counts_track_the_boards(
        moves in prop::collection::vec((0..SIZE + 1, 0..SIZE + 1), 0..120),
    ) {
        let mut session = staircase();
        for (x, y) in moves {
            let player = match session.current_player() {
                Some(player) => player,
                None => break,
            };
            let coord = Coordinate::new(x, y);
            let before = session.phase();
            match session.attack(player, coord) {
                Ok(report) => {
                    prop_assert_eq!(report.attacker, player);
                    let defeated = session.ships_alive(player.opponent()) == 0;
                    if defeated {
                        prop_assert_eq!(report.phase, Phase::GameOver { winner: player });
                    } else {
                        prop_assert_eq!(report.phase, Phase::Attacking(player.opponent()));
                    }
                }
                Err(rejection) => {
                    prop_assert!(
                        rejection == Rejection::OutOfBounds
                            || rejection == Rejection::Retry(coord)
                    );
                    prop_assert_eq!(session.phase(), before);
                }
            }
            check_counts(&session);
        }
        if let Some(winner) = session.winner() {
            prop_assert_eq!(session.ships_alive(winner.opponent()), 0);
            prop_assert!(session.ships_alive(winner) > 0);
        }
    }

    #[test]
    fn placement_never_exceeds_inventory(
        ships in prop::collection::vec(
            (any::<bool>(), 0..SIZE, 0..SIZE, 1usize..5),
            0..40,
        ),
    ) {
        let mut session = Session::new(GameConfig::new(SIZE, SIZE, vec![1, 2, 2, 3]).unwrap());
        for (vertical, x, y, len) in ships {
            let player = match session.phase() {
                Phase::Placing(player) => player,
                _ => break,
            };
            let orientation = if vertical {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            let remaining = session.inventory(player).len();
            let placed = session.board(player).iter_ships().count();
            let result = session.place_ship(player, Ship::new(orientation, x, y, len));
            let now_placed = session.board(player).iter_ships().count();
            if result.is_ok() {
                prop_assert_eq!(now_placed, placed + 1);
                prop_assert_eq!(placed + 1 + session.inventory(player).len(), 4);
            } else {
                prop_assert_eq!(now_placed, placed);
                prop_assert_eq!(session.inventory(player).len(), remaining);
            }
            check_counts(&session);
        }
    }
}
