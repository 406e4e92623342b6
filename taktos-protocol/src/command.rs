//! Operator command symbols
//!
//! One character per actuator channel, case-insensitive. Symbols outside
//! the set are not errors; controllers silently ignore them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An operator command for one actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Command {
    /// `l` - jog one step toward the higher position
    JogUp,
    /// `r` - jog one step toward the lower position
    JogDown,
    /// `p` - pause recipe execution
    Pause,
    /// `c` - continue (resume) recipe execution
    Resume,
    /// `b` - begin: restart the loaded recipe from the top, clearing errors
    Restart,
    /// `n` - explicit no-op, always legal and always ignored
    Nop,
}

impl Command {
    /// Parse a command character, case-insensitively
    ///
    /// Returns `None` for any symbol outside the command set.
    pub const fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            'l' | 'L' => Some(Command::JogUp),
            'r' | 'R' => Some(Command::JogDown),
            'p' | 'P' => Some(Command::Pause),
            'c' | 'C' => Some(Command::Resume),
            'b' | 'B' => Some(Command::Restart),
            'n' | 'N' => Some(Command::Nop),
            _ => None,
        }
    }

    /// Canonical (lower-case) symbol for this command
    pub const fn to_char(self) -> char {
        match self {
            Command::JogUp => 'l',
            Command::JogDown => 'r',
            Command::Pause => 'p',
            Command::Resume => 'c',
            Command::Restart => 'b',
            Command::Nop => 'n',
        }
    }

    /// Returns true for the manual jog commands
    pub const fn is_jog(&self) -> bool {
        matches!(self, Command::JogUp | Command::JogDown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Command::from_char('l'), Some(Command::JogUp));
        assert_eq!(Command::from_char('L'), Some(Command::JogUp));
        assert_eq!(Command::from_char('B'), Some(Command::Restart));
        assert_eq!(Command::from_char('n'), Some(Command::Nop));
    }

    #[test]
    fn test_unknown_symbols_rejected() {
        assert_eq!(Command::from_char('q'), None);
        assert_eq!(Command::from_char('1'), None);
        assert_eq!(Command::from_char(' '), None);
    }

    #[test]
    fn test_symbol_roundtrip() {
        let commands = [
            Command::JogUp,
            Command::JogDown,
            Command::Pause,
            Command::Resume,
            Command::Restart,
            Command::Nop,
        ];

        for command in commands {
            assert_eq!(Command::from_char(command.to_char()), Some(command));
        }
    }

    #[test]
    fn test_is_jog() {
        assert!(Command::JogUp.is_jog());
        assert!(Command::JogDown.is_jog());
        assert!(!Command::Pause.is_jog());
        assert!(!Command::Restart.is_jog());
    }
}
