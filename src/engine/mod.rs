//! Inference Engine
//!
//! Single-pass forward chaining over one food record: resolve the record,
//! run the threshold rules, deduplicate and cap the recommendations, and
//! format the nutrient values for display.
//!
//! All intermediate state lives in a [`WorkingMemory`] created inside the
//! call, so repeated and concurrent analyses cannot leak facts or
//! recommendations into each other.

pub mod format;
pub mod rules;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::knowledge::{FoodCategory, FoodNotFound, KnowledgeBase};
use format::{capitalize, format_nutrition, FormattedNutrient};

/// Hard cap on recommendations returned per analysis.
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Everything derived for one food: built fresh per call, owned by the
/// caller, discarded after rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Capitalized form of the requested name.
    pub display_name: String,
    pub category: FoodCategory,
    /// Nutrient values with resolved units, in record order.
    pub nutrition: Vec<FormattedNutrient>,
    /// Derived facts, in rule order.
    pub facts: Vec<String>,
    /// Deduplicated advice lines, at most [`MAX_RECOMMENDATIONS`].
    pub recommendations: Vec<String>,
}

/// Per-invocation accumulator for the rule pass.
#[derive(Debug, Default)]
pub struct WorkingMemory {
    pub(crate) facts: Vec<String>,
    pub(crate) recommendations: Vec<&'static str>,
}

impl WorkingMemory {
    pub fn fact(&mut self, fact: impl Into<String>) {
        self.facts.push(fact.into());
    }

    pub fn recommend(&mut self, line: &'static str) {
        self.recommendations.push(line);
    }

    pub fn recommend_all(&mut self, lines: &[&'static str]) {
        self.recommendations.extend_from_slice(lines);
    }

    /// Collapse duplicate recommendations (first occurrence wins) and cap
    /// the list. Survivor order is not part of the contract; keeping first
    /// occurrences makes it deterministic.
    fn into_lists(self) -> (Vec<String>, Vec<String>) {
        let WorkingMemory {
            facts,
            recommendations,
        } = self;
        let mut seen = FxHashSet::default();
        let recommendations = recommendations
            .into_iter()
            .filter(|line| seen.insert(*line))
            .take(MAX_RECOMMENDATIONS)
            .map(str::to_string)
            .collect();
        (facts, recommendations)
    }
}

/// Analyse one food by name.
///
/// Unknown names fail with [`FoodNotFound`] carrying the requested string
/// verbatim; the caller decides how to recover (reprompt, list foods, ...).
pub fn analyze(kb: &KnowledgeBase, food_name: &str) -> Result<AnalysisResult, FoodNotFound> {
    let record = kb
        .get_food(food_name)
        .ok_or_else(|| FoodNotFound::single(food_name))?;

    let mut memory = WorkingMemory::default();
    rules::apply_rules(record, &mut memory);
    let (facts, recommendations) = memory.into_lists();

    tracing::debug!(
        "Analysed {}: {} facts, {} recommendations",
        record.name,
        facts.len(),
        recommendations.len()
    );

    Ok(AnalysisResult {
        display_name: capitalize(food_name),
        category: record.category,
        nutrition: format_nutrition(record),
        facts,
        recommendations,
    })
}
