//! Actuator output and indicator traits
//!
//! The output driver owns the mapping from logical position index to
//! physical signal (duty cycle, pulse width) and any settle delay; the
//! core only ever hands it a position index.

use taktos_protocol::StatusSignal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of one physical actuator channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Channel(u8);

impl Channel {
    /// First actuator channel
    pub const CH0: Self = Self(0);
    /// Second actuator channel
    pub const CH1: Self = Self(1);

    /// Create a channel identifier
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Channel index, usable to address per-channel resources
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Errors from the output-side collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// Position index outside the driver's mapping table
    InvalidPosition,
    /// Channel with no backing resource
    UnknownChannel,
    /// Failure in the underlying hardware resource
    Hardware,
}

/// Trait for actuator output drivers
pub trait ActuatorOutput {
    /// Command one channel to a logical position index
    fn set_output(&mut self, channel: Channel, position: u8) -> Result<(), OutputError>;
}

/// Trait for the indicator sink
///
/// Consumes at most one status signal per channel per tick; `None` clears
/// the channel's indicators.
pub trait StatusSink {
    /// Report the channel's current status signal
    fn indicate(&mut self, channel: Channel, signal: Option<StatusSignal>)
        -> Result<(), OutputError>;
}
