//! Interpreter context and single-step execution

use taktos_protocol::Instruction;

use crate::recipe::RecipeStore;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Valid position range for an actuator
///
/// Positions are indices into the output driver's mapping table, so the
/// count is a property of the actuator, not of the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionLimits {
    /// Number of valid positions; indices run `0..position_count`
    pub position_count: u8,
}

impl PositionLimits {
    /// The reference actuator has six positions
    pub const DEFAULT: Self = Self { position_count: 6 };
}

impl Default for PositionLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Recipe faults detected by the interpreter
///
/// All faults are terminal for the active recipe: the owning controller
/// enters its error state and no further instruction fetch occurs until
/// an explicit restart command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    /// Bad `Move`/`Load` operand, unrecognized opcode, or a fetch past the
    /// end of a recipe that is missing its `End`
    InvalidCommand,
    /// `StartLoop` executed while a loop is already open
    NestedLoop,
}

/// Result of executing one instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepOutcome {
    /// The actuator was commanded to a new position
    Moved(u8),
    /// Internal bookkeeping only (wait, loop, load); nothing observable
    Working,
    /// The recipe reached `End`
    Finished,
    /// A terminal recipe fault
    Fault(FaultKind),
}

/// Execution state of one actuator's interpreter
///
/// Owned exclusively by one controller; never shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterpreterContext {
    /// Index of the active recipe in the store
    pub recipe_index: u8,
    /// Program counter: index of the next instruction to execute
    pub pc: u8,
    /// Active wait: `None` = no wait armed
    ///
    /// An armed wait with zero ticks remaining is distinct from "no wait",
    /// which is what gives `Wait(0)` its documented two-tick cost (one to
    /// arm, one to observe completion).
    pub wait: Option<u8>,
    /// Remaining loop iterations; 0 = no open loop
    pub loop_count: u8,
    /// First instruction of the loop body; valid only while `loop_count > 0`
    pub loop_start_pc: u8,
}

impl InterpreterContext {
    /// Create a context parked at the top of the given recipe
    pub const fn new(recipe_index: u8) -> Self {
        Self {
            recipe_index,
            pc: 0,
            wait: None,
            loop_count: 0,
            loop_start_pc: 0,
        }
    }

    /// Restart the currently loaded recipe from the top
    ///
    /// Clears the wait and loop state: a restarted recipe must not inherit
    /// an open loop from the aborted run.
    pub fn restart(&mut self) {
        self.pc = 0;
        self.wait = None;
        self.loop_count = 0;
        self.loop_start_pc = 0;
    }
}

/// Fetch, decode and execute exactly one instruction
///
/// Called once per tick while the owning controller is running. The
/// context is mutated in place; the outcome tells the controller what, if
/// anything, became externally observable.
pub fn step(
    ctx: &mut InterpreterContext,
    store: &RecipeStore,
    limits: PositionLimits,
) -> StepOutcome {
    let recipe = match store.get(ctx.recipe_index) {
        Ok(recipe) => recipe,
        Err(_) => return StepOutcome::Fault(FaultKind::InvalidCommand),
    };

    // A fetch past the end means the recipe is missing its End terminator
    let instruction = match recipe.get(ctx.pc as usize) {
        Some(&instruction) => instruction,
        None => return StepOutcome::Fault(FaultKind::InvalidCommand),
    };

    match instruction {
        Instruction::Move(position) => {
            if position >= limits.position_count {
                // PC stays on the faulting instruction
                StepOutcome::Fault(FaultKind::InvalidCommand)
            } else {
                ctx.pc += 1;
                StepOutcome::Moved(position)
            }
        }

        Instruction::Wait(ticks) => {
            match ctx.wait {
                // First execution arms the wait; the PC does not advance
                None => ctx.wait = Some(ticks),
                // Armed with zero: completion observed, advance past
                Some(0) => {
                    ctx.wait = None;
                    ctx.pc += 1;
                }
                Some(remaining) => {
                    if remaining == 1 {
                        ctx.wait = None;
                        ctx.pc += 1;
                    } else {
                        ctx.wait = Some(remaining - 1);
                    }
                }
            }
            StepOutcome::Working
        }

        Instruction::StartLoop(count) => {
            if ctx.loop_count != 0 {
                StepOutcome::Fault(FaultKind::NestedLoop)
            } else {
                ctx.loop_count = count;
                ctx.loop_start_pc = ctx.pc + 1;
                ctx.pc += 1;
                StepOutcome::Working
            }
        }

        Instruction::EndLoop => {
            if ctx.loop_count == 0 {
                // Loop exhausted (or no loop open): fall through
                ctx.pc += 1;
            } else {
                ctx.loop_count -= 1;
                // Re-execute the body, re-arming any Wait inside it
                ctx.pc = ctx.loop_start_pc;
            }
            StepOutcome::Working
        }

        Instruction::End => StepOutcome::Finished,

        Instruction::Load(index) => {
            if store.contains(index) {
                ctx.recipe_index = index;
                ctx.pc = 0;
                StepOutcome::Working
            } else {
                StepOutcome::Fault(FaultKind::InvalidCommand)
            }
        }

        Instruction::Unknown(_) => StepOutcome::Fault(FaultKind::InvalidCommand),
    }
}
