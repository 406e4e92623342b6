//! Hardware abstraction traits
//!
//! These traits define the interface between the sequencer logic and the
//! external collaborators: the actuator output driver, the indicator
//! sink, the operator console and the periodic tick source.

pub mod input;
pub mod output;

pub use input::{CommandSource, TickSource};
pub use output::{ActuatorOutput, Channel, OutputError, StatusSink};
