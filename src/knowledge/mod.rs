//! Knowledge Base
//!
//! Read-only access to the embedded food table: case-insensitive lookup,
//! table-order listing and category filtering. Purely a read API — the
//! table and the advice pools never change after process start.

pub mod advice;
pub mod foods;

use rustc_hash::FxHashMap;
use thiserror::Error;

pub use foods::{FoodCategory, FoodRecord, Nutrient, FOODS};

/// Requested food identifier(s) absent from the knowledge base.
///
/// Carries the names exactly as the caller supplied them (not normalized),
/// so the presentation layer can echo the user's input verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("food not found: {}", .names.join(", "))]
pub struct FoodNotFound {
    pub names: Vec<String>,
}

impl FoodNotFound {
    pub fn single(name: &str) -> Self {
        Self {
            names: vec![name.to_string()],
        }
    }
}

/// Lookup index over the static food table.
///
/// Cheap to construct, immutable afterwards, and safe to share across
/// threads (all record data is `'static`).
pub struct KnowledgeBase {
    index: FxHashMap<&'static str, &'static FoodRecord>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        let index = FOODS.iter().map(|record| (record.name, record)).collect();
        Self { index }
    }

    /// Case-insensitive lookup. `None` for unknown identifiers, never a panic.
    pub fn get_food(&self, name: &str) -> Option<&'static FoodRecord> {
        let normalized = name.to_lowercase();
        self.index.get(normalized.as_str()).copied()
    }

    /// All food identifiers, in food-table order.
    pub fn all_foods(&self) -> Vec<&'static str> {
        FOODS.iter().map(|record| record.name).collect()
    }

    /// Identifiers whose record matches the category exactly, in table order.
    pub fn foods_by_category(&self, category: FoodCategory) -> Vec<&'static str> {
        FOODS
            .iter()
            .filter(|record| record.category == category)
            .map(|record| record.name)
            .collect()
    }

    /// Full records in table order, for query-layer scans.
    pub fn records(&self) -> &'static [FoodRecord] {
        FOODS
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}
