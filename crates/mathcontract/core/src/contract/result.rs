// Dotlanth
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::word::Word;

use super::keys::ResultKey;

/// Fixed-size ordered mapping from entry name to word.
///
/// Iteration, `Display` and serialization all follow evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractResult {
    values: [Word; ResultKey::COUNT],
    gas_used: u64,
}

impl ContractResult {
    pub(crate) fn new(values: [Word; ResultKey::COUNT], gas_used: u64) -> Self {
        Self { values, gas_used }
    }

    pub fn get(&self, key: ResultKey) -> Word {
        self.values[key.index()]
    }

    /// Looks up an entry by its name, e.g. `"isZero"`.
    pub fn get_by_name(&self, name: &str) -> Option<Word> {
        ResultKey::from_name(name).map(|key| self.get(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResultKey, Word)> + '_ {
        ResultKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Gas charged across all lowered programs.
    pub fn gas_used(&self) -> u64 {
        self.gas_used
    }
}

impl fmt::Display for ContractResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

impl Serialize for ContractResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.name(), &value)?;
        }
        map.end()
    }
}
