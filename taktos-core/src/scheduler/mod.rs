//! Tick sequencer
//!
//! Drives every actuator controller once per fixed 100 ms tick: at most
//! one operator command per controller is consumed, then every controller
//! takes its action, then the resulting positions and status signals go
//! out to the collaborator drivers. The caller owns the cadence via
//! [`crate::traits::TickSource`].

pub mod sequencer;

pub use sequencer::{Sequencer, SequencerFull, TickReport, MAX_ACTUATORS};
