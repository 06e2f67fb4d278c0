//! Query Layer
//!
//! Pairwise food comparison and nutrient-threshold search, built on the
//! inference engine and the knowledge base.

use serde::Serialize;

use crate::engine::{analyze, AnalysisResult};
use crate::knowledge::{FoodNotFound, FoodRecord, KnowledgeBase};

/// Two full analyses plus highlight lines describing where the foods
/// differ.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub first: AnalysisResult,
    pub second: AnalysisResult,
    /// Fixed order: calories, protein, fiber. An exact tie emits no line.
    pub highlights: Vec<String>,
}

/// Compare two foods by name.
///
/// Both names are resolved before any analysis runs, so a single error
/// reports every missing name.
pub fn compare(
    kb: &KnowledgeBase,
    first_name: &str,
    second_name: &str,
) -> Result<ComparisonResult, FoodNotFound> {
    let (record_a, record_b) = match (kb.get_food(first_name), kb.get_food(second_name)) {
        (Some(a), Some(b)) => (a, b),
        (a, b) => {
            let mut names = Vec::new();
            if a.is_none() {
                names.push(first_name.to_string());
            }
            if b.is_none() {
                names.push(second_name.to_string());
            }
            return Err(FoodNotFound { names });
        }
    };

    let first = analyze(kb, first_name)?;
    let second = analyze(kb, second_name)?;
    let highlights = build_highlights(&first, record_a, &second, record_b);

    tracing::debug!(
        "Compared {} vs {}: {} highlights",
        record_a.name,
        record_b.name,
        highlights.len()
    );

    Ok(ComparisonResult {
        first,
        second,
        highlights,
    })
}

fn build_highlights(
    first: &AnalysisResult,
    record_a: &FoodRecord,
    second: &AnalysisResult,
    record_b: &FoodRecord,
) -> Vec<String> {
    let mut highlights = Vec::new();

    let calories_a = record_a.amount_of("Kalori");
    let calories_b = record_b.amount_of("Kalori");
    if calories_a > calories_b {
        highlights.push(format!(
            "{} memiliki kalori {} kcal lebih tinggi",
            first.display_name,
            calories_a - calories_b
        ));
    } else if calories_b > calories_a {
        highlights.push(format!(
            "{} memiliki kalori {} kcal lebih tinggi",
            second.display_name,
            calories_b - calories_a
        ));
    }

    let protein_a = record_a.amount_of("Protein");
    let protein_b = record_b.amount_of("Protein");
    if protein_a > protein_b {
        highlights.push(format!("{} lebih tinggi protein", first.display_name));
    } else if protein_b > protein_a {
        highlights.push(format!("{} lebih tinggi protein", second.display_name));
    }

    let fiber_a = record_a.amount_of("Serat");
    let fiber_b = record_b.amount_of("Serat");
    if fiber_a > fiber_b {
        highlights.push(format!("{} lebih tinggi serat", first.display_name));
    } else if fiber_b > fiber_a {
        highlights.push(format!("{} lebih tinggi serat", second.display_name));
    }

    highlights
}

/// Find all foods reporting `nutrient` with a value of at least
/// `min_value`, sorted descending by value.
///
/// Foods that do not report the nutrient are skipped entirely (0 is not
/// substituted here — "not reported" and "reported as 0" differ for
/// search). The sort is stable, so ties keep food-table order. An empty
/// result is a normal outcome, not an error.
pub fn find_by_nutrient(
    kb: &KnowledgeBase,
    nutrient: &str,
    min_value: f64,
) -> Vec<(&'static str, f64)> {
    let mut results: Vec<(&'static str, f64)> = kb
        .records()
        .iter()
        .filter_map(|record| record.reported(nutrient).map(|value| (record.name, value)))
        .filter(|(_, value)| *value >= min_value)
        .collect();

    results.sort_by(|a, b| b.1.total_cmp(&a.1));
    results
}
