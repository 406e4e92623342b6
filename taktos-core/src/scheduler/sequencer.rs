//! Controller sequencing over the shared tick

use heapless::Vec;

use taktos_protocol::CommandLine;

use crate::control::{ActuatorController, TickOutput};
use crate::recipe::RecipeStore;
use crate::traits::{ActuatorOutput, CommandSource, OutputError, StatusSink};

/// Maximum number of actuators one sequencer services
pub const MAX_ACTUATORS: usize = 2;

/// Attempted to attach more controllers than the sequencer holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequencerFull;

/// Everything observable that one tick produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// One entry per controller, in declaration order
    pub outputs: Vec<TickOutput, MAX_ACTUATORS>,
}

/// Fixed-cadence sequencer over a set of actuator controllers
///
/// Controllers are serviced in the order they were attached; command line
/// slot `n` addresses the `n`-th attached controller. The controllers are
/// independent, so the order does not affect correctness, but keeping it
/// deterministic keeps tests reproducible.
pub struct Sequencer {
    store: RecipeStore,
    controllers: Vec<ActuatorController, MAX_ACTUATORS>,
}

impl Sequencer {
    /// Create a sequencer over the given recipe store
    pub fn new(store: RecipeStore) -> Self {
        Self {
            store,
            controllers: Vec::new(),
        }
    }

    /// Attach a controller to the next command-line slot
    pub fn attach(&mut self, controller: ActuatorController) -> Result<(), SequencerFull> {
        self.controllers.push(controller).map_err(|_| SequencerFull)
    }

    /// Number of attached controllers
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Returns true if no controller is attached
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Access an attached controller by slot, for inspection
    pub fn controller(&self, slot: usize) -> Option<&ActuatorController> {
        self.controllers.get(slot)
    }

    /// Execute one tick
    ///
    /// Feeds at most one command per controller from the line (an empty
    /// line is a valid tick state), then takes every controller's action
    /// unconditionally.
    pub fn tick(&mut self, line: &CommandLine) -> TickReport {
        for (slot, controller) in self.controllers.iter_mut().enumerate() {
            if let Some(command) = line.get(slot) {
                controller.update_state(command);
            }
        }

        let mut report = TickReport::default();
        for controller in self.controllers.iter_mut() {
            // Capacity matches by construction
            let _ = report.outputs.push(controller.take_action(&self.store));
        }
        report
    }

    /// Execute one tick wired to the collaborator traits
    ///
    /// Polls the console once (non-blocking), ticks, then pushes each
    /// controller's position to the output driver and its status signal to
    /// the indicator sink. The tick cadence itself stays with the caller:
    ///
    /// ```ignore
    /// loop {
    ///     timer.await_tick();
    ///     sequencer.service(&mut console, &mut servos, &mut leds)?;
    /// }
    /// ```
    pub fn service<C, O, S>(
        &mut self,
        console: &mut C,
        output: &mut O,
        indicator: &mut S,
    ) -> Result<TickReport, OutputError>
    where
        C: CommandSource,
        O: ActuatorOutput,
        S: StatusSink,
    {
        let line = console.poll().unwrap_or_default();
        let report = self.tick(&line);

        for out in report.outputs.iter() {
            output.set_output(out.channel, out.position)?;
            indicator.indicate(out.channel, out.signal)?;
        }

        Ok(report)
    }
}
