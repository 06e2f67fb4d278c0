//! Nutrition Advisor
//!
//! Rule-based nutrition analysis with forward chaining over an embedded
//! food table. Three pieces:
//! - `knowledge/`: static food records, category tags and advice pools
//! - `engine/`: the single-pass threshold rules producing facts and
//!   recommendations for one food
//! - `query`: pairwise comparison and nutrient search built on the engine
//!
//! The crate is presentation-free: it owns no I/O and installs no tracing
//! subscriber. Callers render [`AnalysisResult`] and friends however they
//! like, and translate [`FoodNotFound`] into a user message (typically by
//! listing [`KnowledgeBase::all_foods`]).

pub mod engine;
pub mod knowledge;
pub mod query;

// Re-export commonly used types
pub use engine::{analyze, AnalysisResult, WorkingMemory, MAX_RECOMMENDATIONS};
pub use knowledge::{FoodCategory, FoodNotFound, FoodRecord, KnowledgeBase, Nutrient};
pub use query::{compare, find_by_nutrient, ComparisonResult};
