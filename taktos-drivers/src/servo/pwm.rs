//! Position servo over a PWM channel
//!
//! The servo driver owns the mapping from logical position index to PWM
//! duty cycle, and the settle-delay accounting that gives the horn time
//! to physically reach a commanded position. The core only ever hands it
//! a position index.
//!
//! The reference mapping spreads six positions across a 20 ms hobby-servo
//! frame: duty ticks `[5, 9, 13, 17, 20, 24]` out of a 250-tick period
//! (2%–9.6% duty, roughly 0° to 160° of horn travel). The table is scaled
//! to whatever resolution the HAL's PWM channel reports.

use embedded_hal::pwm::SetDutyCycle;

use taktos_core::traits::{ActuatorOutput, Channel, OutputError};

/// Number of logical positions the reference servo exposes
pub const POSITIONS: usize = 6;

/// Position-to-duty mapping and timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoConfig {
    /// Duty ticks per position, out of `period_ticks`
    pub duty_table: [u8; POSITIONS],
    /// PWM period in the table's tick unit
    pub period_ticks: u8,
    /// Settle delay per position step of travel, in milliseconds
    pub settle_ms_per_step: u16,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            duty_table: [5, 9, 13, 17, 20, 24],
            period_ticks: 250,
            settle_ms_per_step: 200,
        }
    }
}

/// One position servo on one PWM channel
pub struct PositionServo<P> {
    pwm: P,
    config: ServoConfig,
    /// Last commanded position index
    position: u8,
}

impl<P: SetDutyCycle> PositionServo<P> {
    /// Create a servo driver over a PWM channel
    ///
    /// No pulse is emitted until the first `set_position` call; the
    /// sequencer commands a position on every tick, so the output settles
    /// within one tick of startup.
    pub fn new(pwm: P, config: ServoConfig) -> Self {
        Self {
            pwm,
            config,
            position: 0,
        }
    }

    /// Create a servo with the reference six-position mapping
    pub fn with_defaults(pwm: P) -> Self {
        Self::new(pwm, ServoConfig::default())
    }

    /// Last commanded position index
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Settle delay for a move from the current position to `target`
    ///
    /// Proportional to the number of position steps travelled; zero for a
    /// re-command of the current position.
    pub fn settle_ms(&self, target: u8) -> u32 {
        let steps = self.position.abs_diff(target) as u32;
        steps * self.config.settle_ms_per_step as u32
    }

    /// Command the servo to a logical position index
    pub fn set_position(&mut self, position: u8) -> Result<(), OutputError> {
        let ticks = *self
            .config
            .duty_table
            .get(position as usize)
            .ok_or(OutputError::InvalidPosition)?;

        // Scale table ticks to the channel's duty resolution
        let max_duty = self.pwm.max_duty_cycle() as u32;
        let duty = (ticks as u32 * max_duty / self.config.period_ticks as u32) as u16;

        self.pwm
            .set_duty_cycle(duty)
            .map_err(|_| OutputError::Hardware)?;
        self.position = position;
        Ok(())
    }
}

/// A bank of position servos addressed by actuator channel
///
/// Implements [`ActuatorOutput`] for the sequencer; channel `n` maps to
/// the `n`-th servo in the bank.
pub struct ServoBank<P, const N: usize> {
    servos: [PositionServo<P>; N],
}

impl<P: SetDutyCycle, const N: usize> ServoBank<P, N> {
    /// Create a bank from per-channel servo drivers
    pub fn new(servos: [PositionServo<P>; N]) -> Self {
        Self { servos }
    }

    /// Access one servo by channel, for inspection
    pub fn servo(&self, channel: Channel) -> Option<&PositionServo<P>> {
        self.servos.get(channel.index())
    }
}

impl<P: SetDutyCycle, const N: usize> ActuatorOutput for ServoBank<P, N> {
    fn set_output(&mut self, channel: Channel, position: u8) -> Result<(), OutputError> {
        self.servos
            .get_mut(channel.index())
            .ok_or(OutputError::UnknownChannel)?
            .set_position(position)
    }
}
