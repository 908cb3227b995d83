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
//! Human-readable cell labels. Rows are lettered `A` to `Z` from the top and columns are
//! numbered `1` to `26` from the left, so `(x: 6, y: 1)` is `B7`.

use std::fmt;

use crate::board::{Coordinate, LabelError};

/// Number of rows and columns the labelling scheme can name.
pub const MAX_LABELS: usize = 26;

/// Letter labelling the given row, if it has one.
pub fn row_label(y: usize) -> Option<char> {
    if y < MAX_LABELS {
        Some((b'A' + y as u8) as char)
    } else {
        None
    }
}

/// Number labelling the given column, if it has one.
pub fn column_label(x: usize) -> Option<usize> {
    if x < MAX_LABELS {
        Some(x + 1)
    } else {
        None
    }
}

impl Coordinate {
    /// Display helper for this coordinate's cell label.
    pub fn label(self) -> CellLabel {
        CellLabel(self)
    }
}

/// Display helper that prints a coordinate as its cell label.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CellLabel(pub Coordinate);

impl fmt::Display for CellLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (row_label(self.0.y), column_label(self.0.x)) {
            (Some(row), Some(col)) => write!(f, "{}{}", row, col),
            _ => write!(f, "({}, {})", self.0.x, self.0.y),
        }
    }
}

/// Parse a label such as `B7` or ` b 7 ` into a coordinate. Does not check the label
/// against any particular board.
pub fn parse_cell(text: &str) -> Result<Coordinate, LabelError> {
    let malformed = || LabelError::Malformed(text.to_owned());
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    let row = chars
        .next()
        .filter(char::is_ascii_alphabetic)
        .ok_or_else(malformed)?
        .to_ascii_uppercase();
    let col: usize = chars.as_str().trim().parse().map_err(|_| malformed())?;
    if col == 0 || col > MAX_LABELS {
        return Err(LabelError::Column(col));
    }
    Ok(Coordinate::new(col - 1, (row as u8 - b'A') as usize))
}
