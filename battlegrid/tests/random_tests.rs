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
#![cfg(feature = "rng_gen")]

use rand::{rngs::StdRng, SeedableRng};

use battlegrid::game::{BoardSize, GameConfig, Phase, Player, Session, ShipSet};

#[test]
fn random_placement_fills_both_fleets() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for &size in BoardSize::ALL {
        for &ships in ShipSet::ALL {
            let config = GameConfig::preset(size, ships);
            let mut session = Session::new(config.clone());
            let count = ships.lengths().len();

            assert_eq!(session.place_remaining_at_random(&mut rng), count);
            assert_eq!(session.phase(), Phase::Placing(Player::P1));
            assert_eq!(session.place_remaining_at_random(&mut rng), count);
            assert_eq!(session.phase(), Phase::Attacking(Player::P1));

            for &player in &Player::ALL {
                let board = session.board(player);
                let mut lengths: Vec<usize> =
                    board.iter_ships().map(|s| s.ship().len()).collect();
                lengths.sort();
                assert_eq!(lengths, config.ship_lengths(), "{} on {}", player, config);
                assert_eq!(session.ships_alive(player), count);
            }
        }
    }
}

#[test]
fn random_placement_finishes_a_partial_fleet() {
    use battlegrid::ships::{Orientation, Ship};

    let mut rng = StdRng::seed_from_u64(7);
    let mut session = Session::default();
    session
        .place_ship(Player::P2, Ship::new(Orientation::Vertical, 4, 2, 5))
        .unwrap();
    assert_eq!(session.place_remaining_at_random(&mut rng), 4);
    assert!(session.inventory(Player::P2).is_empty());
    assert_eq!(session.phase(), Phase::Placing(Player::P1));
}

#[test]
fn random_placement_outside_placing_does_nothing() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = Session::new(GameConfig::new(3, 3, vec![1]).unwrap());
    session.place_remaining_at_random(&mut rng);
    session.place_remaining_at_random(&mut rng);
    assert_eq!(session.phase(), Phase::Attacking(Player::P1));
    let before = session.clone();
    assert_eq!(session.place_remaining_at_random(&mut rng), 0);
    assert_eq!(session, before);
}

#[test]
fn random_placement_gives_up_when_crowded() {
    use battlegrid::game::Event;

    // Three length-3 ships only fit on 3x3 if they are all parallel.
    let mut rng = StdRng::seed_from_u64(3);
    let mut session = Session::new(GameConfig::new(3, 3, vec![3, 3, 3]).unwrap());
    session.drain_events();
    let placed = session.place_remaining_at_random(&mut rng);
    assert!(placed <= 3);
    assert_eq!(session.inventory(Player::P2).len(), 3 - placed);
    assert_eq!(session.ships_alive(Player::P2), placed);
    if placed < 3 {
        assert_eq!(session.phase(), Phase::Placing(Player::P2));
    }
    assert!(session
        .pending_events()
        .all(|event| !matches!(event, Event::Rejected(_))));
}
