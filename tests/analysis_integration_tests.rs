//! Analysis Integration Tests
//!
//! Runs the whole pipeline (lookup → rule pass → formatting) over a set of
//! well-known foods as sanity checks, plus the query layer on top.

use nutrition_advisor_rust::{
    analyze, compare, find_by_nutrient, FoodCategory, KnowledgeBase, MAX_RECOMMENDATIONS,
};

// Test foods covering each category and a spread of rule combinations
const TEST_FOODS: &[(&str, FoodCategory, &str)] = &[
    ("tomat", FoodCategory::Vegetable, "Low calorie, very high water"),
    ("brokoli", FoodCategory::Vegetable, "Very high vitamin C"),
    ("pisang", FoodCategory::Fruit, "High carbohydrate fruit"),
    ("nasi", FoodCategory::Staple, "High carbohydrate staple"),
    ("ayam", FoodCategory::Staple, "High calorie, high protein, zero carbs"),
    ("telur", FoodCategory::Staple, "High protein and high fat"),
];

#[test]
fn test_analyze_known_foods_end_to_end() {
    let kb = KnowledgeBase::new();

    for (name, category, description) in TEST_FOODS {
        let result = analyze(&kb, name).unwrap_or_else(|e| panic!("{}: {}", description, e));

        assert_eq!(result.category, *category, "{}", name);
        assert!(!result.facts.is_empty(), "{} produced no facts", name);
        assert!(!result.recommendations.is_empty(), "{}", name);
        assert!(result.recommendations.len() <= MAX_RECOMMENDATIONS, "{}", name);

        // Every nutrient of the record appears formatted, with a unit suffix
        let record = kb.get_food(name).unwrap();
        assert_eq!(result.nutrition.len(), record.nutrients.len(), "{}", name);
        for nutrient in &result.nutrition {
            assert!(nutrient.display.contains(' '), "{}: {:?}", name, nutrient);
        }
    }
}

#[test]
fn test_every_food_in_table_analyses_cleanly() {
    let kb = KnowledgeBase::new();
    for name in kb.all_foods() {
        let result = analyze(&kb, name).unwrap();
        assert_eq!(result.display_name.to_lowercase(), name);
    }
}

#[test]
fn test_unknown_food_lists_are_recoverable() {
    let kb = KnowledgeBase::new();
    let err = analyze(&kb, "Gado-Gado").unwrap_err();
    assert_eq!(err.names, vec!["Gado-Gado".to_string()]);
    // The caller's recovery path: show what the knowledge base does have.
    assert_eq!(kb.all_foods().len(), 12);
}

#[test]
fn test_compare_pipeline() {
    let kb = KnowledgeBase::new();
    let result = compare(&kb, "apel", "pisang").unwrap();

    assert_eq!(result.first.display_name, "Apel");
    assert_eq!(result.second.display_name, "Pisang");
    assert_eq!(result.highlights.len(), 3);
    assert!(result.highlights[0].contains("37 kcal"));
    assert!(result.highlights[0].starts_with("Pisang"));
}

#[test]
fn test_find_by_nutrient_pipeline() {
    let kb = KnowledgeBase::new();

    let results = find_by_nutrient(&kb, "Vitamin C", 50.0);
    let names: Vec<&str> = results.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["brokoli", "jeruk"]);
    assert!(!names.contains(&"tomat"));

    // Descending order holds across the full listing as well
    let all = find_by_nutrient(&kb, "Kalori", 0.0);
    assert_eq!(all.len(), 12);
    for pair in all.windows(2) {
        assert!(pair[0].1 >= pair[1].1);
    }
}

#[test]
fn test_results_serialize_to_json() {
    let kb = KnowledgeBase::new();
    let result = analyze(&kb, "jeruk").unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["display_name"], "Jeruk");
    assert_eq!(json["category"], "Fruit");
    assert_eq!(json["nutrition"][0]["display"], "47 kcal");
    assert!(json["recommendations"].as_array().unwrap().len() <= MAX_RECOMMENDATIONS);
}
