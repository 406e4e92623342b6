//! Controller state machine definition
//!
//! All actuator behavior is a function of the current state and one
//! operator command per tick. The machine is explicit, finite, and
//! deterministic; commands with no entry in the table are ignored where
//! they stand.

use taktos_protocol::Command;

use crate::interp::FaultKind;

/// Controller states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerState {
    /// Power-on state: recipe loaded but not started, manual jog allowed
    Begin,
    /// Recipe executing, one instruction per tick
    Run,
    /// Execution paused by the operator, manual jog allowed
    Paused,
    /// The loaded recipe ran to its `End`
    RecipeEnd,
    /// Terminal recipe fault; no fetch until an explicit restart
    Error(FaultKind),
}

impl ControllerState {
    /// Check if this state executes recipe instructions
    pub fn is_running(&self) -> bool {
        matches!(self, ControllerState::Run)
    }

    /// Check if this state accepts manual jog commands
    pub fn accepts_jog(&self) -> bool {
        matches!(self, ControllerState::Begin | ControllerState::Paused)
    }

    /// Check if this is an error state
    pub fn is_error(&self) -> bool {
        matches!(self, ControllerState::Error(_))
    }

    /// Process a command and return the next state
    ///
    /// This is the pure transition table; latching jogs and resetting the
    /// program counter are side effects handled by the owning controller.
    pub fn transition(self, command: Command) -> Self {
        use Command::*;
        use ControllerState::*;

        match (self, command) {
            // Starting and resuming
            (Begin, Resume) | (Paused, Resume) => Run,

            // Restart enters Run from every state, clearing errors
            (_, Restart) => Run,

            // Pausing only interrupts a running recipe
            (Run, Pause) => Paused,

            // Jogs, no-ops and out-of-place commands leave the state alone
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_to_run() {
        assert_eq!(
            ControllerState::Begin.transition(Command::Resume),
            ControllerState::Run
        );
        assert_eq!(
            ControllerState::Begin.transition(Command::Restart),
            ControllerState::Run
        );
    }

    #[test]
    fn test_pause_resume_cycle() {
        let paused = ControllerState::Run.transition(Command::Pause);
        assert_eq!(paused, ControllerState::Paused);
        assert_eq!(paused.transition(Command::Resume), ControllerState::Run);
    }

    #[test]
    fn test_restart_from_every_state() {
        let states = [
            ControllerState::Begin,
            ControllerState::Run,
            ControllerState::Paused,
            ControllerState::RecipeEnd,
            ControllerState::Error(FaultKind::NestedLoop),
        ];

        for state in states {
            assert_eq!(state.transition(Command::Restart), ControllerState::Run);
        }
    }

    #[test]
    fn test_resume_does_not_clear_terminal_states() {
        assert_eq!(
            ControllerState::RecipeEnd.transition(Command::Resume),
            ControllerState::RecipeEnd
        );
        assert_eq!(
            ControllerState::Error(FaultKind::InvalidCommand).transition(Command::Resume),
            ControllerState::Error(FaultKind::InvalidCommand)
        );
    }

    #[test]
    fn test_jog_and_nop_never_change_state() {
        let states = [
            ControllerState::Begin,
            ControllerState::Run,
            ControllerState::Paused,
            ControllerState::RecipeEnd,
            ControllerState::Error(FaultKind::InvalidCommand),
        ];

        for state in states {
            for command in [Command::JogUp, Command::JogDown, Command::Nop] {
                assert_eq!(state.transition(command), state);
            }
        }
    }

    #[test]
    fn test_pause_ignored_outside_run() {
        for state in [
            ControllerState::Begin,
            ControllerState::Paused,
            ControllerState::RecipeEnd,
        ] {
            assert_eq!(state.transition(Command::Pause), state);
        }
    }

    #[test]
    fn test_accepts_jog() {
        assert!(ControllerState::Begin.accepts_jog());
        assert!(ControllerState::Paused.accepts_jog());
        assert!(!ControllerState::Run.accepts_jog());
        assert!(!ControllerState::RecipeEnd.accepts_jog());
        assert!(!ControllerState::Error(FaultKind::NestedLoop).accepts_jog());
    }
}
