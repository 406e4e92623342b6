//! Actuator controller
//!
//! Wraps one recipe interpreter with the operator-facing state machine:
//! manual jog while idle or paused, pause/resume, restart-with-error-clear,
//! and the per-tick action dispatch.

pub mod actuator;
pub mod machine;

pub use actuator::{ActuatorController, TickOutput};
pub use machine::ControllerState;
