//! Hardware driver implementations for the Taktos sequencer
//!
//! Drivers implement the `taktos-core` collaborator traits over
//! `embedded-hal` 1.0 resources:
//!
//! - [`servo`]: PWM position servos (position index to duty cycle, with
//!   settle-delay accounting)
//! - [`indicator`]: status LED banks
//!
//! All drivers are board-agnostic and unit-tested on the host with mock
//! HAL resources.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod indicator;
pub mod servo;

pub use indicator::{IndicatorPanel, LedBank};
pub use servo::{PositionServo, ServoBank, ServoConfig};
