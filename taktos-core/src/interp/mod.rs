//! Recipe interpreter
//!
//! A per-actuator virtual machine that executes exactly one instruction
//! per service tick. There is no stack, no variables and no arithmetic;
//! the only control flow is a single-level loop and chain-loading another
//! recipe.

pub mod machine;

pub use machine::{step, FaultKind, InterpreterContext, PositionLimits, StepOutcome};
