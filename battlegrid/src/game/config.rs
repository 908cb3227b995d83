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
//! Settings for a new game: board size and the ship lengths each player places.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    board::{Dimensions, MAX_LABELS},
    game::Inventory,
};

/// Widest board allowed, limited by the column labels.
pub const MAX_WIDTH: usize = MAX_LABELS;
/// Tallest board allowed, limited by the row letters.
pub const MAX_HEIGHT: usize = MAX_LABELS;

/// Reason a [`GameConfig`] was rejected.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// Width or height was zero or larger than the labelling scheme supports.
    #[error("board size {width}x{height} must be between 1x1 and 26x26")]
    Dimensions { width: usize, height: usize },

    /// No ship lengths were given.
    #[error("at least one ship is required")]
    NoShips,

    /// A ship length of zero was given.
    #[error("ship lengths must be at least 1")]
    ZeroLength,

    /// A ship is longer than both the width and the height of the board.
    #[error("a ship of length {length} does not fit on a {width}x{height} board")]
    ShipTooLong {
        length: usize,
        width: usize,
        height: usize,
    },

    /// The ships cover more cells than the board has.
    #[error("ships need {cells} cells but the board only has {available}")]
    InsufficientSpace { cells: usize, available: usize },

    /// A preset or ship list could not be parsed.
    #[error("unrecognized setting {0:?}")]
    Unrecognized(String),
}

/// Validated settings for a game: the board [`Dimensions`] shared by both players and the
/// multiset of ship lengths each player must place.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    dim: Dimensions,
    ship_lengths: Vec<usize>,
}

impl GameConfig {
    /// Validate and build a configuration. The lengths are kept in the order given.
    pub fn new(
        width: usize,
        height: usize,
        ship_lengths: Vec<usize>,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 || width > MAX_WIDTH || height > MAX_HEIGHT {
            return Err(ConfigError::Dimensions { width, height });
        }
        if ship_lengths.is_empty() {
            return Err(ConfigError::NoShips);
        }
        let longest = width.max(height);
        for &length in &ship_lengths {
            if length == 0 {
                return Err(ConfigError::ZeroLength);
            }
            if length > longest {
                return Err(ConfigError::ShipTooLong {
                    length,
                    width,
                    height,
                });
            }
        }
        let cells: usize = ship_lengths.iter().sum();
        let available = width * height;
        if cells > available {
            return Err(ConfigError::InsufficientSpace { cells, available });
        }
        Ok(Self {
            dim: Dimensions::new(width, height),
            ship_lengths,
        })
    }

    /// Build a configuration from one of the preset sizes and ship sets. Every
    /// combination of presets is valid.
    pub fn preset(size: BoardSize, ships: ShipSet) -> Self {
        let (width, height) = size.dimensions();
        Self {
            dim: Dimensions::new(width, height),
            ship_lengths: ships.lengths().to_vec(),
        }
    }

    /// Board dimensions for both players.
    pub fn dimensions(&self) -> Dimensions {
        self.dim
    }

    /// Ship lengths each player must place.
    pub fn ship_lengths(&self) -> &[usize] {
        &self.ship_lengths
    }

    /// A fresh inventory holding every configured ship length.
    pub fn inventory(&self) -> Inventory {
        self.ship_lengths.iter().collect()
    }
}

impl Default for GameConfig {
    /// The classic game: a 10x10 board with ships of length 2, 3, 3, 4 and 5.
    fn default() -> Self {
        Self::preset(BoardSize::default(), ShipSet::default())
    }
}

impl fmt::Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}x{} board, ships: {}",
            self.dim.width(),
            self.dim.height(),
            self.inventory()
        )
    }
}

/// Board sizes offered when starting a new game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BoardSize {
    /// 8x8.
    Small,
    /// 10x10.
    Classic,
    /// 9 wide, 16 tall.
    Tall,
    /// 26x26, the largest labelled board.
    Huge,
}

impl BoardSize {
    /// All preset sizes, smallest first.
    pub const ALL: &'static [BoardSize] = &[
        BoardSize::Small,
        BoardSize::Classic,
        BoardSize::Tall,
        BoardSize::Huge,
    ];

    /// `(width, height)` of this preset.
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            BoardSize::Small => (8, 8),
            BoardSize::Classic => (10, 10),
            BoardSize::Tall => (9, 16),
            BoardSize::Huge => (26, 26),
        }
    }

    /// Name used to select this size.
    pub fn name(self) -> &'static str {
        match self {
            BoardSize::Small => "small",
            BoardSize::Classic => "classic",
            BoardSize::Tall => "tall",
            BoardSize::Huge => "huge",
        }
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        BoardSize::Classic
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (width, height) = self.dimensions();
        write!(f, "{}x{}", width, height)
    }
}

impl FromStr for BoardSize {
    type Err = ConfigError;

    /// Parses `8x8`, `10x10`, `9x16` or `26x26`, or the preset names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        BoardSize::ALL
            .iter()
            .copied()
            .find(|size| size.to_string() == s || size.name() == s)
            .ok_or(ConfigError::Unrecognized(s))
    }
}

/// Ship sets offered when starting a new game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipSet {
    /// Lengths 1, 2, 3.
    Tiny,
    /// Lengths 2, 3, 3, 4, 5.
    Classic,
    /// Lengths 1, 3, 5, 7.
    Odd,
    /// Lengths 1, 1, 2, 3, 5, 8.
    Fibonacci,
}

impl ShipSet {
    /// All preset ship sets.
    pub const ALL: &'static [ShipSet] = &[
        ShipSet::Tiny,
        ShipSet::Classic,
        ShipSet::Odd,
        ShipSet::Fibonacci,
    ];

    /// Ship lengths in this set.
    pub fn lengths(self) -> &'static [usize] {
        match self {
            ShipSet::Tiny => &[1, 2, 3],
            ShipSet::Classic => &[2, 3, 3, 4, 5],
            ShipSet::Odd => &[1, 3, 5, 7],
            ShipSet::Fibonacci => &[1, 1, 2, 3, 5, 8],
        }
    }

    /// Name used to select this set.
    pub fn name(self) -> &'static str {
        match self {
            ShipSet::Tiny => "tiny",
            ShipSet::Classic => "classic",
            ShipSet::Odd => "odd",
            ShipSet::Fibonacci => "fibonacci",
        }
    }
}

impl Default for ShipSet {
    fn default() -> Self {
        ShipSet::Classic
    }
}

impl FromStr for ShipSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        ShipSet::ALL
            .iter()
            .copied()
            .find(|set| set.name() == s)
            .ok_or(ConfigError::Unrecognized(s))
    }
}

/// Parse a comma-separated list of ship lengths such as `2,3,3,4,5`. Only the syntax is
/// checked here; [`GameConfig::new`] checks the lengths against the board.
pub fn parse_lengths(s: &str) -> Result<Vec<usize>, ConfigError> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse()
                .map_err(|_| ConfigError::Unrecognized(s.to_owned()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic() {
        let config = GameConfig::default();
        assert_eq!(config.dimensions(), Dimensions::new(10, 10));
        assert_eq!(config.ship_lengths(), &[2, 3, 3, 4, 5]);
        assert_eq!(config.to_string(), "10x10 board, ships: 2, 3, 3, 4, 5");
    }

    #[test]
    fn every_preset_combination_validates() {
        for &size in BoardSize::ALL {
            for &ships in ShipSet::ALL {
                let (width, height) = size.dimensions();
                let preset = GameConfig::preset(size, ships);
                assert_eq!(
                    GameConfig::new(width, height, ships.lengths().to_vec()),
                    Ok(preset)
                );
            }
        }
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert_eq!(
            GameConfig::new(0, 10, vec![2]),
            Err(ConfigError::Dimensions {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            GameConfig::new(27, 10, vec![2]),
            Err(ConfigError::Dimensions {
                width: 27,
                height: 10
            })
        );
        assert!(GameConfig::new(26, 26, vec![2]).is_ok());
    }

    #[test]
    fn rejects_bad_ships() {
        assert_eq!(GameConfig::new(5, 5, vec![]), Err(ConfigError::NoShips));
        assert_eq!(GameConfig::new(5, 5, vec![2, 0]), Err(ConfigError::ZeroLength));
        assert_eq!(
            GameConfig::new(5, 3, vec![6]),
            Err(ConfigError::ShipTooLong {
                length: 6,
                width: 5,
                height: 3
            })
        );
        assert_eq!(
            GameConfig::new(2, 2, vec![2, 2, 1]),
            Err(ConfigError::InsufficientSpace {
                cells: 5,
                available: 4
            })
        );
    }

    #[test]
    fn parses_presets() {
        assert_eq!("9x16".parse::<BoardSize>(), Ok(BoardSize::Tall));
        assert_eq!(" Huge ".parse::<BoardSize>(), Ok(BoardSize::Huge));
        assert_eq!("Fibonacci".parse::<ShipSet>(), Ok(ShipSet::Fibonacci));
        assert!("11x11".parse::<BoardSize>().is_err());
        assert!("large".parse::<ShipSet>().is_err());
    }

    #[test]
    fn parses_length_lists() {
        assert_eq!(parse_lengths("2, 3,3,4 ,5"), Ok(vec![2, 3, 3, 4, 5]));
        assert!(parse_lengths("2,,3").is_err());
        assert!(parse_lengths("two").is_err());
    }
}
