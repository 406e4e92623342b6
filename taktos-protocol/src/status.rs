//! Indicator status signals
//!
//! Each controller reports at most one status signal per tick (the states
//! are mutually exclusive). The flag values drive a parallel LED port, one
//! bank per actuator channel.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// LED bank bit assignments
const FLAG_PAUSED: u8 = 0x01;
const FLAG_RECIPE_END: u8 = 0x02;
const FLAG_NESTED_LOOP: u8 = 0x04;
const FLAG_INVALID_COMMAND: u8 = 0x08;

/// A per-tick indicator signal from one controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StatusSignal {
    /// Execution paused by the operator
    Paused,
    /// The loaded recipe ran to its `End` instruction
    RecipeEnd,
    /// Recipe fault: bad operand or unrecognized opcode
    InvalidCommand,
    /// Recipe fault: `StartLoop` inside an open loop
    NestedLoop,
}

impl StatusSignal {
    /// LED bank flags for this signal
    pub const fn to_flags(self) -> u8 {
        match self {
            StatusSignal::Paused => FLAG_PAUSED,
            StatusSignal::RecipeEnd => FLAG_RECIPE_END,
            StatusSignal::NestedLoop => FLAG_NESTED_LOOP,
            StatusSignal::InvalidCommand => FLAG_INVALID_COMMAND,
        }
    }

    /// LED bank flags for an optional signal (`0x00` when running or idle)
    pub fn flags_for(signal: Option<StatusSignal>) -> u8 {
        signal.map(StatusSignal::to_flags).unwrap_or(0)
    }

    /// Returns true for the fault signals
    pub const fn is_fault(&self) -> bool {
        matches!(self, StatusSignal::InvalidCommand | StatusSignal::NestedLoop)
    }
}
