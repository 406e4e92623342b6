//! Recipes and the recipe store
//!
//! A recipe is a fixed, ordered sequence of instructions authored at build
//! time. Only *which* recipe is active can change at runtime (via the
//! `Load` instruction); recipe contents never do.

pub mod builtin;
pub mod store;

pub use store::{Recipe, RecipeStore, StoreError};
