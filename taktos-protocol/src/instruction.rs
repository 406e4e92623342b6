//! Recipe instruction byte codec
//!
//! Opcode assignments match the original recipe byte format: `0x3` and
//! `0x7` are unassigned and decode to [`Instruction::Unknown`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest value representable in the 5-bit operand field
pub const OPERAND_MAX: u8 = 0x1F;

// Opcode field values (3 high bits of the instruction byte)
const OP_END: u8 = 0x00;
const OP_MOVE: u8 = 0x01;
const OP_WAIT: u8 = 0x02;
const OP_START_LOOP: u8 = 0x04;
const OP_END_LOOP: u8 = 0x05;
const OP_LOAD: u8 = 0x06;

/// A decoded recipe instruction
///
/// All operand-carrying variants hold a value in `0..=OPERAND_MAX`.
/// `Unknown` carries the raw byte of an unassigned opcode pattern so the
/// interpreter can report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Instruction {
    /// Terminate the recipe; the actuator holds its position
    End,
    /// Move the actuator to an absolute position index
    Move(u8),
    /// Hold the current position for the given number of ticks
    ///
    /// A wait arms on its first execution tick and completes on a later
    /// tick, so `Wait(n)` occupies the instruction for `n + 1` ticks
    /// (`Wait(0)` for 2).
    Wait(u8),
    /// Open a loop that repeats the body `count + 1` times in total
    ///
    /// Loops are single-level by design; a nested `StartLoop` is a fault.
    StartLoop(u8),
    /// Close the loop body, or fall through when no loop is open
    EndLoop,
    /// Switch execution to another recipe, resetting the program counter
    Load(u8),
    /// Unassigned opcode pattern (raw byte preserved)
    Unknown(u8),
}

impl Instruction {
    /// Decode an instruction byte
    ///
    /// Total over all 256 byte values; unassigned opcodes decode to
    /// [`Instruction::Unknown`].
    pub const fn from_byte(byte: u8) -> Self {
        let operand = byte & OPERAND_MAX;
        match byte >> 5 {
            OP_END => Instruction::End,
            OP_MOVE => Instruction::Move(operand),
            OP_WAIT => Instruction::Wait(operand),
            OP_START_LOOP => Instruction::StartLoop(operand),
            OP_END_LOOP => Instruction::EndLoop,
            OP_LOAD => Instruction::Load(operand),
            _ => Instruction::Unknown(byte),
        }
    }

    /// Encode back to the wire byte
    ///
    /// Operands are masked to the 5-bit field; `Unknown` round-trips its
    /// raw byte.
    pub const fn to_byte(self) -> u8 {
        match self {
            Instruction::End => OP_END << 5,
            Instruction::Move(p) => (OP_MOVE << 5) | (p & OPERAND_MAX),
            Instruction::Wait(n) => (OP_WAIT << 5) | (n & OPERAND_MAX),
            Instruction::StartLoop(n) => (OP_START_LOOP << 5) | (n & OPERAND_MAX),
            Instruction::EndLoop => OP_END_LOOP << 5,
            Instruction::Load(r) => (OP_LOAD << 5) | (r & OPERAND_MAX),
            Instruction::Unknown(raw) => raw,
        }
    }

    /// Returns true for the unassigned opcode patterns
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Instruction::Unknown(_))
    }
}
