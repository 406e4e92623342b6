//! Per-actuator controller
//!
//! One `ActuatorController` instance exists per physical actuator; the
//! logic is written once and parameterized over the channel identifier.
//! Each tick produces exactly one [`TickOutput`]: the current position for
//! the output driver and an optional status signal for the indicator.

use taktos_protocol::{Command, StatusSignal};

use crate::interp::{self, FaultKind, InterpreterContext, PositionLimits, StepOutcome};
use crate::recipe::RecipeStore;
use crate::traits::Channel;

use super::machine::ControllerState;

/// A latched manual jog request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Jog {
    /// One step toward the higher position
    Up,
    /// One step toward the lower position
    Down,
}

/// Externally observable output of one controller tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutput {
    /// Which actuator this output belongs to
    pub channel: Channel,
    /// Current position index for the output driver
    pub position: u8,
    /// Status signal for the indicator sink, if any
    pub signal: Option<StatusSignal>,
}

/// Controller for one positional actuator
///
/// Owns the interpreter context exclusively; created once at startup and
/// alive for the process lifetime.
#[derive(Debug)]
pub struct ActuatorController {
    channel: Channel,
    state: ControllerState,
    position: u8,
    pending_jog: Option<Jog>,
    ctx: InterpreterContext,
    limits: PositionLimits,
}

impl ActuatorController {
    /// Create a controller parked at position 0 in the `Begin` state
    pub fn new(channel: Channel, recipe_index: u8) -> Self {
        Self::with_limits(channel, recipe_index, PositionLimits::DEFAULT)
    }

    /// Create a controller with a non-default position range
    pub fn with_limits(channel: Channel, recipe_index: u8, limits: PositionLimits) -> Self {
        Self {
            channel,
            state: ControllerState::Begin,
            position: 0,
            pending_jog: None,
            ctx: InterpreterContext::new(recipe_index),
            limits,
        }
    }

    /// This controller's actuator channel
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Current controller state
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Current actuator position index
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Index of the recipe currently loaded in the interpreter
    pub fn recipe_index(&self) -> u8 {
        self.ctx.recipe_index
    }

    /// Apply one operator command
    ///
    /// Jogs latch a pending move in the states that allow manual motion;
    /// restart additionally resets the interpreter to the top of the
    /// loaded recipe. Unknown symbols never reach this point (the console
    /// parser drops them), and `Nop` falls through the table unchanged.
    pub fn update_state(&mut self, command: Command) {
        if self.state.accepts_jog() {
            match command {
                Command::JogUp => self.pending_jog = Some(Jog::Up),
                Command::JogDown => self.pending_jog = Some(Jog::Down),
                _ => {}
            }
        }

        if command == Command::Restart {
            self.ctx.restart();
        }

        self.state = self.state.transition(command);
    }

    /// Execute one service tick
    ///
    /// While running, exactly one instruction is fetched and executed. A
    /// fault raised this tick is reported by the indicator from the next
    /// tick on, once the controller sits in its error state.
    pub fn take_action(&mut self, store: &RecipeStore) -> TickOutput {
        let signal = match self.state {
            ControllerState::Run => {
                match interp::step(&mut self.ctx, store, self.limits) {
                    StepOutcome::Moved(position) => self.position = position,
                    StepOutcome::Working => {}
                    StepOutcome::Finished => self.state = ControllerState::RecipeEnd,
                    StepOutcome::Fault(kind) => self.state = ControllerState::Error(kind),
                }
                None
            }

            ControllerState::Begin => {
                self.apply_pending_jog();
                None
            }

            ControllerState::Paused => {
                self.apply_pending_jog();
                Some(StatusSignal::Paused)
            }

            ControllerState::RecipeEnd => Some(StatusSignal::RecipeEnd),

            ControllerState::Error(kind) => Some(match kind {
                FaultKind::InvalidCommand => StatusSignal::InvalidCommand,
                FaultKind::NestedLoop => StatusSignal::NestedLoop,
            }),
        };

        TickOutput {
            channel: self.channel,
            position: self.position,
            signal,
        }
    }

    /// Apply a latched jog as a single clamped position step
    ///
    /// Clamping at either end is silent: no wraparound, no error.
    fn apply_pending_jog(&mut self) {
        if let Some(jog) = self.pending_jog.take() {
            match jog {
                Jog::Up => {
                    if self.position + 1 < self.limits.position_count {
                        self.position += 1;
                    }
                }
                Jog::Down => {
                    if self.position > 0 {
                        self.position -= 1;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;
    use proptest::prelude::*;
    use taktos_protocol::Instruction::{End, Move, StartLoop, Wait};

    fn controller() -> ActuatorController {
        ActuatorController::new(Channel::CH0, 0)
    }

    #[test]
    fn test_initial_conditions() {
        let ctrl = controller();

        assert_eq!(ctrl.state(), ControllerState::Begin);
        assert_eq!(ctrl.position(), 0);
        assert_eq!(ctrl.channel(), Channel::CH0);
    }

    #[test]
    fn test_jog_applied_once_while_begun() {
        let store = RecipeStore::new(&[&[End]]);
        let mut ctrl = controller();

        ctrl.update_state(Command::JogUp);
        let out = ctrl.take_action(&store);
        assert_eq!(out.position, 1);
        assert_eq!(out.signal, None);

        // The latch is cleared: a second tick does not jog again
        let out = ctrl.take_action(&store);
        assert_eq!(out.position, 1);
    }

    #[test]
    fn test_jog_clamps_at_both_ends() {
        let store = RecipeStore::new(&[&[End]]);
        let mut ctrl = controller();

        // Already at 0: down-jog is silently clamped
        ctrl.update_state(Command::JogDown);
        assert_eq!(ctrl.take_action(&store).position, 0);

        // Walk to the top and one past it
        for _ in 0..7 {
            ctrl.update_state(Command::JogUp);
            ctrl.take_action(&store);
        }
        assert_eq!(ctrl.position(), 5);
    }

    #[test]
    fn test_jog_ignored_while_running() {
        const RECIPE: &Recipe = &[Wait(5), End];
        let store = RecipeStore::new(&[RECIPE]);
        let mut ctrl = controller();

        ctrl.update_state(Command::Resume);
        assert_eq!(ctrl.state(), ControllerState::Run);

        // Jog while running: no latch, no movement
        ctrl.update_state(Command::JogUp);
        let out = ctrl.take_action(&store);
        assert_eq!(out.position, 0);

        // Pausing afterwards does not revive the discarded jog
        ctrl.update_state(Command::Pause);
        assert_eq!(ctrl.take_action(&store).position, 0);
    }

    #[test]
    fn test_pause_reports_and_jogs() {
        const RECIPE: &Recipe = &[Wait(10), End];
        let store = RecipeStore::new(&[RECIPE]);
        let mut ctrl = controller();

        // Scenario: b, p, l, c - the latched jog is applied exactly once
        // during the paused tick, never during Run
        ctrl.update_state(Command::Restart);
        ctrl.take_action(&store);

        ctrl.update_state(Command::Pause);
        ctrl.update_state(Command::JogUp);
        let out = ctrl.take_action(&store);
        assert_eq!(out.signal, Some(StatusSignal::Paused));
        assert_eq!(out.position, 1);

        ctrl.update_state(Command::Resume);
        let out = ctrl.take_action(&store);
        assert_eq!(out.signal, None);
        assert_eq!(out.position, 1);
    }

    #[test]
    fn test_wait_zero_scenario_runs_to_recipe_end() {
        // [Move(0), Wait(0), Move(3), End]: position 3 after the wait quirk
        const RECIPE: &Recipe = &[Move(0), Wait(0), Move(3), End];
        let store = RecipeStore::new(&[RECIPE]);
        let mut ctrl = controller();

        ctrl.update_state(Command::Resume);

        ctrl.take_action(&store); // Move(0)
        assert_eq!(ctrl.position(), 0);
        ctrl.take_action(&store); // Wait arms
        ctrl.take_action(&store); // Wait completes
        let out = ctrl.take_action(&store); // Move(3)
        assert_eq!(out.position, 3);

        ctrl.take_action(&store); // End
        assert_eq!(ctrl.state(), ControllerState::RecipeEnd);
        let out = ctrl.take_action(&store);
        assert_eq!(out.signal, Some(StatusSignal::RecipeEnd));
        assert_eq!(out.position, 3);
    }

    #[test]
    fn test_fault_signalled_from_next_tick() {
        const RECIPE: &Recipe = &[Move(6), End];
        let store = RecipeStore::new(&[RECIPE]);
        let mut ctrl = controller();

        ctrl.update_state(Command::Resume);

        // The faulting tick itself reports no signal (the state flips
        // during the action)
        let out = ctrl.take_action(&store);
        assert_eq!(out.signal, None);
        assert_eq!(
            ctrl.state(),
            ControllerState::Error(FaultKind::InvalidCommand)
        );

        // From the next tick on the indicator sees the fault, continuously
        for _ in 0..3 {
            let out = ctrl.take_action(&store);
            assert_eq!(out.signal, Some(StatusSignal::InvalidCommand));
            assert_eq!(out.position, 0);
        }
    }

    #[test]
    fn test_restart_clears_error_and_replays() {
        const RECIPE: &Recipe = &[StartLoop(1), StartLoop(1), End];
        let store = RecipeStore::new(&[RECIPE]);
        let mut ctrl = controller();

        ctrl.update_state(Command::Resume);
        ctrl.take_action(&store); // StartLoop(1)
        ctrl.take_action(&store); // nested -> fault
        assert_eq!(ctrl.state(), ControllerState::Error(FaultKind::NestedLoop));

        // Resume is not a recovery path
        ctrl.update_state(Command::Resume);
        assert!(ctrl.state().is_error());

        // Restart clears the error and replays from PC 0
        ctrl.update_state(Command::Restart);
        assert_eq!(ctrl.state(), ControllerState::Run);
        ctrl.take_action(&store); // StartLoop(1) again, loop state cleared
        assert_eq!(ctrl.state(), ControllerState::Run);
    }

    #[test]
    fn test_restart_during_run_replays_from_top() {
        const RECIPE: &Recipe = &[Move(1), Move(2), Move(3), End];
        let store = RecipeStore::new(&[RECIPE]);
        let mut ctrl = controller();

        ctrl.update_state(Command::Resume);
        ctrl.take_action(&store);
        ctrl.take_action(&store);
        assert_eq!(ctrl.position(), 2);

        ctrl.update_state(Command::Restart);
        assert_eq!(ctrl.take_action(&store).position, 1);
    }

    #[test]
    fn test_recipe_end_only_accepts_restart() {
        const RECIPE: &Recipe = &[End];
        let store = RecipeStore::new(&[RECIPE]);
        let mut ctrl = controller();

        ctrl.update_state(Command::Resume);
        ctrl.take_action(&store);
        assert_eq!(ctrl.state(), ControllerState::RecipeEnd);

        for command in [Command::JogUp, Command::Pause, Command::Resume, Command::Nop] {
            ctrl.update_state(command);
            assert_eq!(ctrl.state(), ControllerState::RecipeEnd);
        }

        ctrl.update_state(Command::Restart);
        assert_eq!(ctrl.state(), ControllerState::Run);
    }

    proptest! {
        #[test]
        fn prop_jog_sequence_stays_in_range(jogs in proptest::collection::vec(any::<bool>(), 0..64)) {
            let store = RecipeStore::new(&[&[End]]);
            let mut ctrl = controller();

            for up in jogs {
                let command = if up { Command::JogUp } else { Command::JogDown };
                ctrl.update_state(command);
                let out = ctrl.take_action(&store);
                prop_assert!(out.position < 6);
            }
        }
    }
}
