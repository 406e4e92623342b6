//! Board-agnostic core logic for the recipe sequencer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Read-only recipe store and the built-in recipe table
//! - Recipe interpreter (one instruction per service tick)
//! - Actuator controller state machine (jog, pause, run, error recovery)
//! - Tick sequencer driving every controller at a fixed cadence
//! - Hardware abstraction traits (actuator output, indicator, console,
//!   tick source)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod control;
pub mod interp;
pub mod recipe;
pub mod scheduler;
pub mod traits;
