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

//! Opcodes command for listing the instruction set

use mathcontract_core::opcode::{LOAD_GAS, Opcode};

pub fn render_opcodes() -> String {
    let mut out = format!("{:<8} {:<6} {:>3}\n", "MNEMONIC", "BYTE", "GAS");
    for opcode in Opcode::all() {
        out.push_str(&format!(
            "{:<8} {:<6} {:>3}\n",
            opcode.to_mnemonic(),
            format!("{:#04x}", opcode.as_u8()),
            opcode.gas_cost()
        ));
    }
    out.push_str(&format!("{:<8} {:<6} {:>3}\n", "LOAD", "-", LOAD_GAS));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_opcode() {
        let table = render_opcodes();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[1], "ADD      0x01     3");
        assert!(lines.iter().any(|line| line.starts_with("ISZERO   0x15")));
        assert_eq!(lines[12], "LOAD     -        3");
    }
}
