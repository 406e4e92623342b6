//! Built-in recipe table
//!
//! The closed set of pre-authored recipes shipped with the firmware. Each
//! exercises one aspect of the interpreter contract; recipe 4 (the
//! every-position sweep) is the usual demo default.

use taktos_protocol::Instruction::{self, End, EndLoop, Load, Move, StartLoop, Wait};

use super::store::{Recipe, RecipeStore};

/// Position sweep out and back, no waits between moves
pub const DEFAULT_DELAY: &Recipe = &[Move(0), Move(5), Move(0), End];

/// Single-level loop; `StartLoop(0)` runs the body once
pub const LOOP_ONCE: &Recipe = &[
    Move(3),
    StartLoop(0),
    Move(1),
    Move(4),
    EndLoop,
    Move(0),
    End,
];

/// Wait-zero quirk: the wait still costs an arming tick and a completion tick
pub const WAIT_ZERO: &Recipe = &[Move(2), Wait(0), Move(3), End];

/// Three chained maximum waits: 93 ticks (9.3 s) between the moves
pub const LONG_DELAY: &Recipe = &[Move(2), Move(3), Wait(31), Wait(31), Wait(31), Move(4), End];

/// Visit every position with a one-second dwell at each
pub const EVERY_POSITION: &Recipe = &[
    Move(0),
    Wait(10),
    Move(1),
    Wait(10),
    Move(2),
    Wait(10),
    Move(3),
    Wait(10),
    Move(4),
    Wait(10),
    Move(5),
    End,
];

/// Ends immediately; the trailing instructions are unreachable
pub const IMMEDIATE_END: &Recipe = &[End, Move(3), End];

/// Faults on the out-of-range `Move(6)` operand
pub const BAD_MOVE_OPERAND: &Recipe = &[Move(0), Move(5), Move(6), End];

/// Faults on the nested `StartLoop`
pub const NESTED_LOOP: &Recipe = &[StartLoop(1), StartLoop(1), End];

/// Chains into the every-position sweep via `Load`
pub const CHAIN_LOAD: &Recipe = &[Move(5), Wait(2), Load(4)];

/// The built-in recipe table, in load-index order
pub const RECIPES: &[&Recipe] = &[
    DEFAULT_DELAY,
    LOOP_ONCE,
    WAIT_ZERO,
    LONG_DELAY,
    EVERY_POSITION,
    IMMEDIATE_END,
    BAD_MOVE_OPERAND,
    NESTED_LOOP,
    CHAIN_LOAD,
];

/// Store over the built-in table
pub const STORE: RecipeStore = RecipeStore::new(RECIPES);
