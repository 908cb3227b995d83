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
//! The bag of ship lengths a player still has to place.

use std::{collections::BTreeMap, fmt, iter::FromIterator};

/// Multiset of ship lengths. Ships of equal length are interchangeable, so the bag only
/// records how many of each length remain.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    /// Count of remaining ships for each length. Lengths with no ships left are removed.
    counts: BTreeMap<usize, usize>,
}

impl Inventory {
    /// Construct an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if at least one ship of the given length remains.
    pub fn contains(&self, length: usize) -> bool {
        self.counts.contains_key(&length)
    }

    /// Add one ship of the given length.
    pub fn add(&mut self, length: usize) {
        *self.counts.entry(length).or_insert(0) += 1;
    }

    /// Remove one ship of the given length. Returns false, leaving the bag unchanged, if
    /// no ship of that length remains.
    pub fn take(&mut self, length: usize) -> bool {
        match self.counts.get_mut(&length) {
            None => false,
            Some(count) => {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(&length);
                }
                true
            }
        }
    }

    /// Returns true if no ships remain.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of ships remaining, counting duplicates.
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate the remaining lengths in ascending order, repeating duplicates.
    pub fn iter(&self) -> impl '_ + Iterator<Item = usize> {
        self.counts
            .iter()
            .flat_map(|(&length, &count)| std::iter::repeat(length).take(count))
    }
}

impl FromIterator<usize> for Inventory {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut inventory = Inventory::new();
        for length in iter {
            inventory.add(length);
        }
        inventory
    }
}

impl<'a> FromIterator<&'a usize> for Inventory {
    fn from_iter<T: IntoIterator<Item = &'a usize>>(iter: T) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl fmt::Display for Inventory {
    /// Comma-separated lengths, e.g. `2, 3, 3, 4, 5`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut lengths = self.iter();
        if let Some(first) = lengths.next() {
            write!(f, "{}", first)?;
            for length in lengths {
                write!(f, ", {}", length)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_counted() {
        let mut inventory: Inventory = [2, 3, 3, 4, 5].iter().collect();
        assert_eq!(inventory.len(), 5);
        assert!(inventory.take(3));
        assert!(inventory.contains(3));
        assert!(inventory.take(3));
        assert!(!inventory.contains(3));
        assert!(!inventory.take(3));
        assert_eq!(inventory.iter().collect::<Vec<_>>(), vec![2, 4, 5]);
    }

    #[test]
    fn take_missing_length_is_noop() {
        let mut inventory: Inventory = vec![2, 3].into_iter().collect();
        let before = inventory.clone();
        assert!(!inventory.take(6));
        assert_eq!(inventory, before);
    }

    #[test]
    fn empties_out() {
        let mut inventory: Inventory = [1, 1].iter().collect();
        assert!(inventory.take(1));
        assert!(!inventory.is_empty());
        assert!(inventory.take(1));
        assert!(inventory.is_empty());
        assert_eq!(inventory.len(), 0);
    }

    #[test]
    fn displays_sorted() {
        let inventory: Inventory = [5, 3, 2, 3, 4].iter().collect();
        assert_eq!(inventory.to_string(), "2, 3, 3, 4, 5");
        assert_eq!(Inventory::new().to_string(), "");
    }
}
