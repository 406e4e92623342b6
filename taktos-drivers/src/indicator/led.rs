//! Status LED bank
//!
//! Four LEDs per actuator channel, one per status signal. The controller
//! states are mutually exclusive, so at most one LED in a bank is lit at
//! a time; a running or idle controller shows none.

use embedded_hal::digital::OutputPin;

use taktos_core::traits::{Channel, OutputError, StatusSink};
use taktos_protocol::StatusSignal;

/// One channel's status LEDs
pub struct LedBank<P> {
    paused: P,
    recipe_end: P,
    nested_loop: P,
    invalid_command: P,
}

impl<P: OutputPin> LedBank<P> {
    /// Create a bank from its four pins
    pub fn new(paused: P, recipe_end: P, nested_loop: P, invalid_command: P) -> Self {
        Self {
            paused,
            recipe_end,
            nested_loop,
            invalid_command,
        }
    }

    /// Drive the bank from a controller's per-tick signal
    ///
    /// `None` extinguishes every LED in the bank.
    pub fn apply(&mut self, signal: Option<StatusSignal>) -> Result<(), OutputError> {
        Self::drive(&mut self.paused, signal == Some(StatusSignal::Paused))?;
        Self::drive(&mut self.recipe_end, signal == Some(StatusSignal::RecipeEnd))?;
        Self::drive(&mut self.nested_loop, signal == Some(StatusSignal::NestedLoop))?;
        Self::drive(
            &mut self.invalid_command,
            signal == Some(StatusSignal::InvalidCommand),
        )
    }

    fn drive(pin: &mut P, on: bool) -> Result<(), OutputError> {
        let result = if on { pin.set_high() } else { pin.set_low() };
        result.map_err(|_| OutputError::Hardware)
    }
}

/// Indicator panel: one LED bank per actuator channel
///
/// Implements [`StatusSink`] for the sequencer.
pub struct IndicatorPanel<P, const N: usize> {
    banks: [LedBank<P>; N],
}

impl<P: OutputPin, const N: usize> IndicatorPanel<P, N> {
    /// Create a panel from per-channel banks
    pub fn new(banks: [LedBank<P>; N]) -> Self {
        Self { banks }
    }
}

impl<P: OutputPin, const N: usize> StatusSink for IndicatorPanel<P, N> {
    fn indicate(
        &mut self,
        channel: Channel,
        signal: Option<StatusSignal>,
    ) -> Result<(), OutputError> {
        self.banks
            .get_mut(channel.index())
            .ok_or(OutputError::UnknownChannel)?
            .apply(signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Mock GPIO pin for testing; shares its state so the bank can own it
    #[derive(Clone)]
    struct MockPin {
        high: Rc<Cell<bool>>,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: Rc::new(Cell::new(false)),
            }
        }

        fn is_high(&self) -> bool {
            self.high.get()
        }
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high.set(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high.set(true);
            Ok(())
        }
    }

    fn bank_with_probes() -> (LedBank<MockPin>, [MockPin; 4]) {
        let pins = [MockPin::new(), MockPin::new(), MockPin::new(), MockPin::new()];
        let bank = LedBank::new(
            pins[0].clone(),
            pins[1].clone(),
            pins[2].clone(),
            pins[3].clone(),
        );
        (bank, pins)
    }

    #[test]
    fn test_one_led_per_signal() {
        let (mut bank, pins) = bank_with_probes();

        bank.apply(Some(StatusSignal::Paused)).unwrap();
        assert!(pins[0].is_high());
        assert!(!pins[1].is_high());

        bank.apply(Some(StatusSignal::NestedLoop)).unwrap();
        assert!(!pins[0].is_high());
        assert!(pins[2].is_high());

        bank.apply(Some(StatusSignal::InvalidCommand)).unwrap();
        assert!(!pins[2].is_high());
        assert!(pins[3].is_high());
    }

    #[test]
    fn test_none_clears_bank() {
        let (mut bank, pins) = bank_with_probes();

        bank.apply(Some(StatusSignal::RecipeEnd)).unwrap();
        assert!(pins[1].is_high());

        bank.apply(None).unwrap();
        assert!(pins.iter().all(|pin| !pin.is_high()));
    }

    #[test]
    fn test_panel_routes_by_channel() {
        let (bank0, pins0) = bank_with_probes();
        let (bank1, pins1) = bank_with_probes();
        let mut panel = IndicatorPanel::new([bank0, bank1]);

        panel
            .indicate(Channel::CH1, Some(StatusSignal::Paused))
            .unwrap();
        assert!(pins1[0].is_high());
        assert!(!pins0[0].is_high());

        assert_eq!(
            panel.indicate(Channel::new(7), None),
            Err(OutputError::UnknownChannel)
        );
    }
}
