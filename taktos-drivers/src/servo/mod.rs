//! PWM position servo drivers

pub mod pwm;

pub use pwm::{PositionServo, ServoBank, ServoConfig, POSITIONS};
