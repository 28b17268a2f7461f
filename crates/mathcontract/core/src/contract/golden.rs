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

//! Reference contract
//!
//! The literal scenario every reimplementation must reproduce: `a = 10`,
//! `b = 4`. The formulas are authoritative. The values annotated on the
//! source contract are kept alongside so their disagreement stays visible.

use std::fmt;

use thiserror::Error;
use tracing::{info, warn};

use crate::error::ContractError;
use crate::word::Word;

use super::evaluator::evaluate;
use super::keys::ResultKey;
use super::result::ContractResult;

pub const REFERENCE_A: Word = 10;
pub const REFERENCE_B: Word = 4;

/// Expected entries for the reference operands.
pub const REFERENCE_TABLE: [(ResultKey, Word); ResultKey::COUNT] = [
    (ResultKey::Add, 14),
    (ResultKey::Sub, 6),
    (ResultKey::Mul, 40),
    (ResultKey::Div, 2),
    (ResultKey::Mod, 2),
    (ResultKey::Lt, 0),
    (ResultKey::Gt, 1),
    (ResultKey::Eq, 0),
    (ResultKey::Neq, 1),
    (ResultKey::Lte, 0),
    (ResultKey::Gte, 1),
    (ResultKey::IsZero, 1),
    (ResultKey::NotZero, 0),
];

/// Values written beside each statement of the source contract.
///
/// The arithmetic annotations do not follow from their formulas under any
/// standard integer semantics; they are reported, never enforced.
pub const SOURCE_ANNOTATIONS: [(ResultKey, Word); ResultKey::COUNT] = [
    (ResultKey::Add, 13),
    (ResultKey::Sub, 7),
    (ResultKey::Mul, 30),
    (ResultKey::Div, 3),
    (ResultKey::Mod, 1),
    (ResultKey::Lt, 0),
    (ResultKey::Gt, 1),
    (ResultKey::Eq, 0),
    (ResultKey::Neq, 1),
    (ResultKey::Lte, 0),
    (ResultKey::Gte, 1),
    (ResultKey::IsZero, 1),
    (ResultKey::NotZero, 0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub key: ResultKey,
    pub expected: Word,
    pub actual: Word,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: expected {}, got {}", self.key, self.expected, self.actual)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GoldenError {
    #[error("Reference evaluation failed: {0}")]
    Evaluation(#[from] ContractError),

    #[error("Reference contract violated: {} mismatched entries", .0.len())]
    Mismatched(Vec<Mismatch>),
}

/// Compares `result` against the reference table.
pub fn verify(result: &ContractResult) -> Vec<Mismatch> {
    REFERENCE_TABLE
        .iter()
        .filter_map(|&(key, expected)| {
            let actual = result.get(key);
            (actual != expected).then_some(Mismatch { key, expected, actual })
        })
        .collect()
}

/// Evaluates the reference operands and checks every entry.
pub fn check_reference() -> Result<ContractResult, GoldenError> {
    let result = evaluate(REFERENCE_A, REFERENCE_B)?;
    let mismatches = verify(&result);

    if !mismatches.is_empty() {
        for mismatch in &mismatches {
            warn!(%mismatch, "reference entry mismatch");
        }
        return Err(GoldenError::Mismatched(mismatches));
    }

    info!(entries = result.len(), gas = result.gas_used(), "reference contract verified");
    Ok(result)
}

/// Entries whose source annotation disagrees with the formula.
///
/// `expected` carries the annotated value, `actual` the computed one.
pub fn annotation_discrepancies() -> Vec<Mismatch> {
    SOURCE_ANNOTATIONS
        .iter()
        .zip(REFERENCE_TABLE.iter())
        .filter(|((_, annotated), (_, computed))| annotated != computed)
        .map(|(&(key, annotated), &(_, computed))| Mismatch {
            key,
            expected: annotated,
            actual: computed,
        })
        .collect()
}
