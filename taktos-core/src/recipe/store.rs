//! Read-only recipe registry
//!
//! The store is populated once at startup from `&'static` tables and never
//! mutated. Direct out-of-range access is a programmer error surfaced as
//! [`StoreError`]; the interpreter's `Load` handler validates indices
//! before dereferencing and reports a recipe fault instead.

use taktos_protocol::Instruction;

/// A recipe: an ordered, immutable instruction sequence
pub type Recipe = [Instruction];

/// Errors from direct store access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Recipe index outside the store's bounds
    IndexOutOfRange,
}

/// Read-only registry of recipes, addressed by small integer index
#[derive(Debug, Clone, Copy)]
pub struct RecipeStore {
    recipes: &'static [&'static Recipe],
}

impl RecipeStore {
    /// Create a store over a static recipe table
    pub const fn new(recipes: &'static [&'static Recipe]) -> Self {
        Self { recipes }
    }

    /// Number of recipes in the store
    pub const fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns true if the store holds no recipes
    pub const fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Returns true if `index` addresses a recipe in this store
    pub fn contains(&self, index: u8) -> bool {
        (index as usize) < self.recipes.len()
    }

    /// Look up a recipe by index
    pub fn get(&self, index: u8) -> Result<&'static Recipe, StoreError> {
        self.recipes
            .get(index as usize)
            .copied()
            .ok_or(StoreError::IndexOutOfRange)
    }
}
