//! Console input and tick-source traits

use taktos_protocol::CommandLine;

/// Trait for the operator command source
///
/// Delivery is non-blocking: absence of input is a valid tick state. When
/// commands arrive faster than the tick cadence, implementations keep the
/// most recent line (most-recent-wins) rather than queueing.
pub trait CommandSource {
    /// Take the pending command line, if one arrived since the last poll
    fn poll(&mut self) -> Option<CommandLine>;
}

/// Trait for the periodic tick source
///
/// Abstracts the platform's "wait for the next cadence boundary"
/// mechanism; the core never polls hardware directly. The reference
/// cadence is 100 ms.
pub trait TickSource {
    /// Block until the next tick boundary
    fn await_tick(&mut self);
}
