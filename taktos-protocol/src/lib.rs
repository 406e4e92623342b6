//! Recipe instruction encoding and operator console protocol
//!
//! This crate defines the byte-level formats shared between the recipe
//! authoring side, the sequencer core and the operator console. It has no
//! hardware or policy dependencies.
//!
//! # Instruction format
//!
//! Every recipe instruction is a single byte:
//! ```text
//! ┌────────────┬─────────────────┐
//! │ OPCODE     │ OPERAND         │
//! │ bits 7..5  │ bits 4..0 (0–31)│
//! └────────────┴─────────────────┘
//! ```
//!
//! Decoding happens once at fetch time into the [`Instruction`] sum type;
//! the core never re-masks bits at use sites.
//!
//! # Operator console
//!
//! The console delivers CR-terminated lines carrying one command character
//! per actuator channel. [`LineParser`] turns a byte stream into
//! [`CommandLine`] values; [`Command`] is the symbol set itself.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod console;
pub mod instruction;
pub mod status;

pub use command::Command;
pub use console::{CommandLine, LineParser, MAX_CHANNELS};
pub use instruction::{Instruction, OPERAND_MAX};
pub use status::StatusSignal;
