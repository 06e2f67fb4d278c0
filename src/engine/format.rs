//! Nutrient Formatting
//!
//! Unit resolution and display rendering for nutrient values. Resolution
//! order: per-record override, then the default unit table, then grams.
//! Micro-nutrients outside the default table (e.g. "Omega-3") fall back to
//! grams when a record carries no override — kept as-is for output parity.

use serde::Serialize;

use crate::knowledge::FoodRecord;

/// Default display units for the common nutrients.
const DEFAULT_UNITS: &[(&str, &str)] = &[
    ("Kalori", "kcal"),
    ("Karbohidrat", "g"),
    ("Protein", "g"),
    ("Lemak", "g"),
    ("Serat", "g"),
    ("Air", "%"),
];

const FALLBACK_UNIT: &str = "g";

/// One nutrient rendered for display, e.g. `("Kalori", "18 kcal")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedNutrient {
    pub name: &'static str,
    pub display: String,
}

/// Resolve the display unit for a nutrient of a given record.
pub fn resolve_unit(record: &FoodRecord, nutrient: &str) -> &'static str {
    record
        .unit_override(nutrient)
        .or_else(|| {
            DEFAULT_UNITS
                .iter()
                .find(|(name, _)| *name == nutrient)
                .map(|(_, unit)| *unit)
        })
        .unwrap_or(FALLBACK_UNIT)
}

/// Format every nutrient of a record, in record order.
pub fn format_nutrition(record: &FoodRecord) -> Vec<FormattedNutrient> {
    record
        .nutrients
        .iter()
        .map(|nutrient| FormattedNutrient {
            name: nutrient.name,
            display: format!("{} {}", nutrient.amount, resolve_unit(record, nutrient.name)),
        })
        .collect()
}

/// Uppercase the first character and lowercase the rest ("aYAm" -> "Ayam").
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;

    #[test]
    fn test_unit_resolution_order() {
        let kb = KnowledgeBase::new();
        let tomat = kb.get_food("tomat").unwrap();
        // Override wins
        assert_eq!(resolve_unit(tomat, "Kalori"), "kcal");
        assert_eq!(resolve_unit(tomat, "Air"), "%");
        // Default table
        assert_eq!(resolve_unit(tomat, "Protein"), "g");
        // Fallback for nutrients outside the default table
        let ikan = kb.get_food("ikan").unwrap();
        assert_eq!(resolve_unit(ikan, "Omega-3"), "g");
    }

    #[test]
    fn test_format_nutrition_keeps_record_order() {
        let kb = KnowledgeBase::new();
        let tomat = kb.get_food("tomat").unwrap();
        let formatted = format_nutrition(tomat);
        assert_eq!(formatted.len(), tomat.nutrients.len());
        assert_eq!(formatted[0].name, "Kalori");
        assert_eq!(formatted[0].display, "18 kcal");
        assert_eq!(formatted[1].display, "3.9 g");
        assert_eq!(formatted[6].display, "95 %");
    }

    #[test]
    fn test_whole_values_render_without_decimals() {
        let kb = KnowledgeBase::new();
        let ayam = kb.get_food("ayam").unwrap();
        let formatted = format_nutrition(ayam);
        assert_eq!(formatted[2].display, "31 g"); // Protein
        assert_eq!(formatted[1].display, "0 g"); // Karbohidrat
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("tomat"), "Tomat");
        assert_eq!(capitalize("AYAM"), "Ayam");
        assert_eq!(capitalize(""), "");
    }
}
