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

//! Integer word semantics
//!
//! Every value produced by the contract is a fixed-width signed integer.
//! Comparisons and logical negation never surface a native `bool`; they are
//! encoded as exactly `0` or `1`.

/// Machine word of the reference platform (32-bit signed).
pub type Word = i32;

pub const FALSE: Word = 0;
pub const TRUE: Word = 1;
pub const ZERO: Word = 0;

/// Encodes a truth value as `1` or `0`.
#[inline]
pub fn from_truth(condition: bool) -> Word {
    if condition { TRUE } else { FALSE }
}

/// Zero-truthiness negation: `1` when `x == 0`, otherwise `0`.
#[inline]
pub fn logical_not(x: Word) -> Word {
    if x == ZERO { TRUE } else { FALSE }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_truth() {
        assert_eq!(from_truth(true), 1);
        assert_eq!(from_truth(false), 0);
    }

    #[test]
    fn test_logical_not_of_zero() {
        assert_eq!(logical_not(0), 1);
    }

    #[test]
    fn test_logical_not_of_nonzero() {
        assert_eq!(logical_not(10), 0);
        assert_eq!(logical_not(-1), 0);
        assert_eq!(logical_not(Word::MIN), 0);
        assert_eq!(logical_not(Word::MAX), 0);
    }

    #[test]
    fn test_double_negation_normalizes() {
        assert_eq!(logical_not(logical_not(42)), 1);
        assert_eq!(logical_not(logical_not(0)), 0);
    }
}
