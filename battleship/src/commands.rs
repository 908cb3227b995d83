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
//! Parsing of the commands typed at the game prompt.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use battlegrid::board::{parse_cell, Coordinate, LabelError};

/// A command from the player at the prompt.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    /// Place a ship between two end cells.
    Place(Coordinate, Coordinate),
    /// Place all remaining ships at random.
    Random,
    /// Attack a cell.
    Fire(Coordinate),
    /// Restart with the same settings.
    New,
    Rules,
    Help,
    Quit,
}

/// Why a line could not be understood.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CommandError {
    Unknown(String),
    Cell(LabelError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CommandError::Unknown(line) => {
                write!(f, "Invalid command \"{}\". Use '?' for help", line)
            }
            CommandError::Cell(err) => write!(f, "Invalid cell: {}", err),
        }
    }
}

impl From<LabelError> for CommandError {
    fn from(err: LabelError) -> Self {
        CommandError::Cell(err)
    }
}

/// Parse one line of input. Expects the line to already be trimmed and lowercased.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    static PLACE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:place|put)\s+
        (?P<from>[a-z]\s*[0-9]+)
        (?:\s*(?:-|to)\s*|\s+)
        (?P<to>[a-z]\s*[0-9]+)$",
        )
        .unwrap()
    });
    static FIRE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:(?:fire|attack|shoot)(?:\s+at)?\s+)?
        (?P<cell>[a-z]\s*[0-9]+)$",
        )
        .unwrap()
    });

    Ok(match line {
        "random" | "rand" | "randomize" => Command::Random,
        "new" | "restart" => Command::New,
        "rules" => Command::Rules,
        "?" | "help" | "h" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            if let Some(captures) = PLACE.captures(other) {
                Command::Place(
                    parse_cell(&captures["from"])?,
                    parse_cell(&captures["to"])?,
                )
            } else if let Some(captures) = FIRE.captures(other) {
                Command::Fire(parse_cell(&captures["cell"])?)
            } else {
                return Err(CommandError::Unknown(other.to_owned()));
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: usize, y: usize) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn keywords() {
        assert_eq!(parse_command("random"), Ok(Command::Random));
        assert_eq!(parse_command("new"), Ok(Command::New));
        assert_eq!(parse_command("rules"), Ok(Command::Rules));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
    }

    #[test]
    fn place_forms() {
        let expected = Ok(Command::Place(cell(0, 0), cell(4, 0)));
        assert_eq!(parse_command("place a1 a5"), expected);
        assert_eq!(parse_command("place a1-a5"), expected);
        assert_eq!(parse_command("put a 1 to a 5"), expected);
        assert_eq!(
            parse_command("place j10 c10"),
            Ok(Command::Place(cell(9, 9), cell(9, 2)))
        );
    }

    #[test]
    fn fire_forms() {
        let expected = Ok(Command::Fire(cell(6, 1)));
        assert_eq!(parse_command("b7"), expected);
        assert_eq!(parse_command("fire b7"), expected);
        assert_eq!(parse_command("fire at b7"), expected);
        assert_eq!(parse_command("shoot b 7"), expected);
    }

    #[test]
    fn bad_input() {
        assert_eq!(
            parse_command("launch b7"),
            Err(CommandError::Unknown("launch b7".to_owned()))
        );
        assert_eq!(
            parse_command("place a1"),
            Err(CommandError::Unknown("place a1".to_owned()))
        );
        assert_eq!(
            parse_command("fire b27"),
            Err(CommandError::Cell(LabelError::Column(27)))
        );
        assert_eq!(
            parse_command("b0"),
            Err(CommandError::Cell(LabelError::Column(0)))
        );
    }
}
