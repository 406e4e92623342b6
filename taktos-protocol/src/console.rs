//! Operator console line parser
//!
//! The console delivers one command character per actuator channel,
//! terminated by CR. A line containing `x`/`X` is operator shorthand for
//! "discard this line" and invalidates every slot in it. LF is tolerated
//! so that CRLF terminals work unchanged.
//!
//! The parser is byte-fed and incremental: feed it bytes as they arrive
//! and it yields a complete [`CommandLine`] once per terminator.

use crate::command::Command;

/// Number of command slots per console line (one per actuator channel)
pub const MAX_CHANNELS: usize = 2;

/// One parsed console line: at most one command per actuator channel
///
/// Unrecognized symbols leave their slot empty without invalidating the
/// rest of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandLine {
    slots: [Option<Command>; MAX_CHANNELS],
}

impl CommandLine {
    /// A line carrying no commands (a valid tick state)
    pub const fn empty() -> Self {
        Self {
            slots: [None; MAX_CHANNELS],
        }
    }

    /// Build a line from per-channel slots
    pub const fn new(slots: [Option<Command>; MAX_CHANNELS]) -> Self {
        Self { slots }
    }

    /// Command for the given channel slot, if any
    pub fn get(&self, slot: usize) -> Option<Command> {
        self.slots.get(slot).copied().flatten()
    }

    /// Returns true if no slot carries a command
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }
}

/// Incremental parser for console command lines
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    slots: [Option<Command>; MAX_CHANNELS],
    filled: usize,
    invalid: bool,
}

impl LineParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard any partially accumulated line
    pub fn reset(&mut self) {
        self.slots = [None; MAX_CHANNELS];
        self.filled = 0;
        self.invalid = false;
    }

    /// Feed a single byte
    ///
    /// Returns a complete line when the terminator arrives, unless the
    /// line was invalidated with `x`. Bytes beyond the channel count are
    /// discarded until the terminator.
    pub fn feed(&mut self, byte: u8) -> Option<CommandLine> {
        match byte {
            b'\r' => {
                let line = if self.invalid {
                    None
                } else {
                    Some(CommandLine::new(self.slots))
                };
                self.reset();
                line
            }
            b'\n' => None,
            b'x' | b'X' => {
                self.invalid = true;
                None
            }
            _ => {
                if self.filled < MAX_CHANNELS {
                    self.slots[self.filled] = Command::from_char(byte as char);
                    self.filled += 1;
                }
                None
            }
        }
    }

    /// Feed multiple bytes, returning the first complete line found
    ///
    /// Remaining bytes after a complete line are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Option<CommandLine> {
        for &byte in bytes {
            if let Some(line) = self.feed(byte) {
                return Some(line);
            }
        }
        None
    }
}
