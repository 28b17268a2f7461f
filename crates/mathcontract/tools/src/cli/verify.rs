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

//! Verify command for checking the reference contract

use clap::Args;
use mathcontract_core::contract::golden::{annotation_discrepancies, check_reference};
use tracing::warn;

use crate::error::ToolError;

/// Arguments for the verify command
#[derive(Args, Debug, Default)]
pub struct VerifyArgs {
    /// Warn about source annotations that disagree with their formulas
    #[arg(long)]
    pub annotations: bool,
}

/// Execute the verify command
pub fn run_verify(args: &VerifyArgs) -> Result<String, ToolError> {
    let result = check_reference()?;

    if args.annotations {
        for discrepancy in annotation_discrepancies() {
            warn!(
                key = %discrepancy.key,
                annotated = discrepancy.expected,
                computed = discrepancy.actual,
                "source annotation disagrees with formula"
            );
        }
    }

    Ok(format!("ok: {} entries, gas={}\n", result.len(), result.gas_used()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_reference() {
        assert_eq!(run_verify(&VerifyArgs::default()).unwrap(), "ok: 13 entries, gas=122\n");
    }

    #[test]
    fn test_annotations_do_not_fail_verification() {
        let args = VerifyArgs { annotations: true };
        assert!(run_verify(&args).is_ok());
    }
}
