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
use std::io::{self, BufRead, Write};

use clap::{value_t, App, Arg, ArgMatches};
use rand::{rngs::StdRng, SeedableRng};

use battlegrid::{
    game::{
        config::parse_lengths, BoardSize, ConfigError, Event, GameConfig, Phase, Player,
        Session, ShipSet,
    },
    ships::Ship,
};

use crate::{
    commands::{parse_command, Command},
    render::{describe, BoardView},
};

mod commands;
mod logging;
mod render;

const RULES: &str = "\
How to play:
    Two players share this terminal and take turns. Player2 places their ships first,
    then Player1. Each ship is a straight line of cells, placed by naming its two end
    cells. Ships may not overlap or leave the board.

    Once both fleets are placed, Player1 fires first. Players then alternate, firing at
    one cell of the opponent's board per turn. A ship sinks when every one of its cells
    has been hit. The first player to sink the whole enemy fleet wins.";

const HELP: &str = "\
Available Commands:
    place <cell> <cell>   place a ship between two end cells, e.g. \"place A1 A5\".
    random                place your remaining ships at random.
    <cell>, fire <cell>   attack a cell of the opponent's board, e.g. \"B7\".
    new                   start over with the same board and ships.
    rules                 show the rules.
    help, ?               show this help.
    quit                  leave the game.";

fn main() -> io::Result<()> {
    logging::init_logging();

    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Hot-seat command line battleship game for two players.")
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("preset board size")
                .takes_value(true)
                .possible_values(&[
                    "8x8", "10x10", "9x16", "26x26", "small", "classic", "tall", "huge",
                ])
                .case_insensitive(true)
                .conflicts_with_all(&["width", "height"]),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("N")
                .help("custom board width, up to 26")
                .takes_value(true)
                .requires("height"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("N")
                .help("custom board height, up to 26")
                .takes_value(true)
                .requires("width"),
        )
        .arg(
            Arg::with_name("ships")
                .long("ships")
                .value_name("SHIPS")
                .help("ship set (tiny, classic, odd, fibonacci) or lengths like 2,3,3,4,5")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for random ship placement")
                .takes_value(true),
        )
        .get_matches();

    let config = match config_from_args(&matches) {
        Ok(config) => config,
        Err(err) => clap::Error::with_description(
            &format!("invalid game settings: {}", err),
            clap::ErrorKind::InvalidValue,
        )
        .exit(),
    };
    let mut rng = if matches.is_present("seed") {
        StdRng::seed_from_u64(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
    } else {
        StdRng::from_entropy()
    };

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut session = Session::new(config);

    println!("Type help or ? for commands, rules for the rules.");
    loop {
        println!();
        show_status(&mut session);
        show_boards(&session);

        let prompt = match session.current_player() {
            Some(player) => format!("{}>", player),
            None => "new or quit>".to_owned(),
        };
        let cmd = input.read_input_lower(&prompt, |input| match parse_command(input) {
            Ok(cmd) => Some(cmd),
            Err(err) => {
                println!("{}", err);
                None
            }
        })?;

        // Hot seat: commands always act for whoever's turn it is.
        let player = session.current_player().unwrap_or(Player::P1);
        match cmd {
            Command::Place(a, b) => match Ship::from_endpoints(a, b) {
                Some(ship) => {
                    let _ = session.place_ship(player, ship);
                }
                None => println!("Ships must be placed in a straight line."),
            },
            Command::Random => match session.phase() {
                Phase::Placing(_) => {
                    session.place_remaining_at_random(&mut rng);
                }
                _ => println!("Ships can only be placed at random before the battle."),
            },
            Command::Fire(coord) => {
                let _ = session.attack(player, coord);
            }
            Command::New => session.restart(),
            Command::Rules => println!("{}", RULES),
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
        }
    }
    Ok(())
}

/// Build the game configuration from the command line.
fn config_from_args(matches: &ArgMatches) -> Result<GameConfig, ConfigError> {
    let (width, height) = match (
        matches.value_of("size"),
        matches.value_of("width"),
        matches.value_of("height"),
    ) {
        (Some(size), _, _) => size.parse::<BoardSize>()?.dimensions(),
        (None, Some(width), Some(height)) => (parse_side(width)?, parse_side(height)?),
        _ => BoardSize::default().dimensions(),
    };
    let lengths = match matches.value_of("ships") {
        Some(ships) => match ships.parse::<ShipSet>() {
            Ok(set) => set.lengths().to_vec(),
            Err(_) => parse_lengths(ships)?,
        },
        None => ShipSet::default().lengths().to_vec(),
    };
    GameConfig::new(width, height, lengths)
}

fn parse_side(value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Unrecognized(value.to_owned()))
}

/// Print a status line for every event since the last prompt.
fn show_status(session: &mut Session) {
    let events: Vec<Event> = session.drain_events().collect();
    for event in &events {
        println!("{}", describe(event, session));
    }
}

/// Print the boards the current player may see. Both boards are revealed once the game
/// is over.
fn show_boards(session: &Session) {
    match session.phase() {
        Phase::Placing(player) => {
            println!("{}'s board:", player);
            print!("{}", BoardView::revealed(session.board(player)));
        }
        Phase::Attacking(player) => {
            println!("{}'s waters:", player.opponent());
            print!("{}", BoardView::hidden(session.board(player.opponent())));
            println!("{}'s waters:", player);
            print!("{}", BoardView::hidden(session.board(player)));
        }
        Phase::GameOver { .. } => {
            for &player in &Player::ALL {
                println!("{}'s board:", player);
                print!("{}", BoardView::revealed(session.board(player)));
            }
        }
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            print!("{} ", prompt);
            io::stdout().flush()?;
            self.buf.clear();
            if self.read.read_line(&mut self.buf)? == 0 {
                println!();
                std::process::exit(0);
            }
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }
}
