//! Threshold Rules
//!
//! The ordered forward-chaining pass. Rules are independent and purely
//! additive: no rule reads another rule's output, so order only affects
//! the display order of facts and recommendations, never their content.
//! Nutrients a record does not report are read as 0.

use crate::knowledge::advice::{self, AdviceTopic};
use crate::knowledge::{FoodCategory, FoodRecord};

use super::WorkingMemory;

// ============================================================================
// THRESHOLDS
// Each `x / x_b` pair is mutually exclusive by construction: the two
// conditions cannot both hold for the same value.
// ============================================================================

pub const LOW_CALORIE_BELOW: f64 = 50.0;
pub const HIGH_CALORIE_ABOVE: f64 = 150.0;
pub const HIGH_PROTEIN_ABOVE: f64 = 10.0;
pub const MODERATE_PROTEIN_ABOVE: f64 = 5.0;
pub const HIGH_CARB_ABOVE: f64 = 20.0;
pub const LOW_CARB_BELOW: f64 = 5.0;
pub const HIGH_FIBER_ABOVE: f64 = 2.0;
pub const LOW_FAT_BELOW: f64 = 1.0;
pub const HIGH_FAT_ABOVE: f64 = 10.0;
pub const HIGH_WATER_ABOVE: f64 = 85.0;
pub const HIGH_VITAMIN_C_ABOVE: f64 = 50.0;
pub const GOOD_VITAMIN_C_ABOVE: f64 = 10.0;

/// How many lines the threshold rules draw from their pools.
const POOL_TAKE: usize = 2;

/// Run the full rule pass for one record, accumulating facts and
/// recommendations into `memory`.
pub fn apply_rules(record: &FoodRecord, memory: &mut WorkingMemory) {
    // Rule 1: food category
    match record.category {
        FoodCategory::Vegetable => {
            memory.fact("Termasuk dalam kategori sayuran");
            memory.recommend_all(AdviceTopic::Vegetable.pool());
        }
        FoodCategory::Fruit => {
            memory.fact("Termasuk dalam kategori buah-buahan");
            memory.recommend_all(AdviceTopic::Fruit.pool());
        }
        FoodCategory::Staple => {}
    }

    // Rule 2: calories
    let calories = record.amount_of("Kalori");
    if calories < LOW_CALORIE_BELOW {
        memory.fact("Makanan rendah kalori (< 50 kcal)");
        memory.recommend(advice::LOW_CALORIE_DIET);
    } else if calories > HIGH_CALORIE_ABOVE {
        memory.fact("Makanan tinggi kalori (> 150 kcal)");
        memory.recommend(advice::HIGH_CALORIE_PORTION);
    }

    // Rule 3: protein
    let protein = record.amount_of("Protein");
    if protein > HIGH_PROTEIN_ABOVE {
        memory.fact(format!("Tinggi protein ({}g)", protein));
        memory.recommend_all(&AdviceTopic::HighProtein.pool()[..POOL_TAKE]);
    } else if protein > MODERATE_PROTEIN_ABOVE {
        memory.fact(format!("Sumber protein sedang ({}g)", protein));
    }

    // Rule 4: carbohydrate
    let carbohydrate = record.amount_of("Karbohidrat");
    if carbohydrate > HIGH_CARB_ABOVE {
        memory.fact(format!("Tinggi karbohidrat ({}g)", carbohydrate));
        memory.recommend_all(&AdviceTopic::HighCarbohydrate.pool()[..POOL_TAKE]);
    } else if carbohydrate < LOW_CARB_BELOW {
        memory.fact(format!("Rendah karbohidrat ({}g)", carbohydrate));
        memory.recommend(advice::LOW_CARB_DIET);
    }

    // Rule 5: fiber
    let fiber = record.amount_of("Serat");
    if fiber > HIGH_FIBER_ABOVE {
        memory.fact(format!("Tinggi serat ({}g)", fiber));
        memory.recommend_all(&AdviceTopic::HighFiber.pool()[..POOL_TAKE]);
    }

    // Rule 6: fat
    let fat = record.amount_of("Lemak");
    if fat < LOW_FAT_BELOW {
        memory.fact("Sangat rendah lemak");
        memory.recommend(advice::LOW_FAT_CHOICE);
    } else if fat > HIGH_FAT_ABOVE {
        memory.fact(format!("Tinggi lemak ({}g)", fat));
        memory.recommend(advice::HIGH_FAT_PORTION);
    }

    // Rule 7: water content
    let water = record.amount_of("Air");
    if water > HIGH_WATER_ABOVE {
        memory.fact(format!("Sangat tinggi kandungan air ({}%)", water));
        memory.recommend_all(&AdviceTopic::Hydration.pool()[..POOL_TAKE]);
    }

    // Rule 8: vitamin C
    let vitamin_c = record.amount_of("Vitamin C");
    if vitamin_c > HIGH_VITAMIN_C_ABOVE {
        memory.fact(format!("Sangat tinggi Vitamin C ({}mg)", vitamin_c));
        memory.recommend(advice::HIGH_VITAMIN_C_IMMUNITY);
    } else if vitamin_c > GOOD_VITAMIN_C_ABOVE {
        memory.fact(format!("Sumber Vitamin C yang baik ({}mg)", vitamin_c));
    }

    // Rule 9: general advice, always
    memory.recommend_all(&AdviceTopic::General.pool()[..POOL_TAKE]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{KnowledgeBase, Nutrient};

    fn run(record: &FoodRecord) -> WorkingMemory {
        let mut memory = WorkingMemory::default();
        apply_rules(record, &mut memory);
        memory
    }

    #[test]
    fn test_tomat_fires_low_calorie_and_high_water() {
        let kb = KnowledgeBase::new();
        let memory = run(kb.get_food("tomat").unwrap());
        assert!(memory.facts.contains(&"Termasuk dalam kategori sayuran".to_string()));
        assert!(memory.facts.contains(&"Makanan rendah kalori (< 50 kcal)".to_string()));
        assert!(memory
            .facts
            .contains(&"Sangat tinggi kandungan air (95%)".to_string()));
        // 14 mg vitamin C: the "good source" side of the pair, not the high one
        assert!(memory
            .facts
            .contains(&"Sumber Vitamin C yang baik (14mg)".to_string()));
    }

    #[test]
    fn test_ayam_fires_high_calorie_protein_and_low_carb() {
        let kb = KnowledgeBase::new();
        let memory = run(kb.get_food("ayam").unwrap());
        assert!(memory.facts.contains(&"Makanan tinggi kalori (> 150 kcal)".to_string()));
        assert!(memory.facts.contains(&"Tinggi protein (31g)".to_string()));
        // 0 g carbohydrate is below the low-carb bound and fires the rule
        assert!(memory.facts.contains(&"Rendah karbohidrat (0g)".to_string()));
        // No category fact for staples
        assert!(!memory.facts.iter().any(|f| f.starts_with("Termasuk")));
    }

    #[test]
    fn test_threshold_pairs_are_mutually_exclusive() {
        let kb = KnowledgeBase::new();
        for record in kb.records() {
            let memory = run(record);
            let calorie_facts = memory
                .facts
                .iter()
                .filter(|f| f.starts_with("Makanan rendah kalori") || f.starts_with("Makanan tinggi kalori"))
                .count();
            assert!(calorie_facts <= 1, "{}", record.name);
            let fat_facts = memory
                .facts
                .iter()
                .filter(|f| f.starts_with("Sangat rendah lemak") || f.starts_with("Tinggi lemak"))
                .count();
            assert!(fat_facts <= 1, "{}", record.name);
        }
    }

    #[test]
    fn test_moderate_protein_emits_fact_without_advice() {
        // No table entry sits in the 5-10 g band, so use a synthetic record.
        let record = FoodRecord {
            name: "tahu",
            category: FoodCategory::Staple,
            nutrients: &[
                Nutrient { name: "Kalori", amount: 76.0 },
                Nutrient { name: "Protein", amount: 8.0 },
                Nutrient { name: "Karbohidrat", amount: 1.9 },
                Nutrient { name: "Lemak", amount: 4.8 },
            ],
            unit_overrides: &[("Kalori", "kcal")],
        };
        let memory = run(&record);
        assert!(memory.facts.contains(&"Sumber protein sedang (8g)".to_string()));
        assert!(!memory
            .recommendations
            .contains(&AdviceTopic::HighProtein.pool()[0]));
    }

    #[test]
    fn test_general_advice_always_present() {
        let kb = KnowledgeBase::new();
        let general = AdviceTopic::General.pool();
        for record in kb.records() {
            let memory = run(record);
            assert!(memory.recommendations.contains(&general[0]), "{}", record.name);
            assert!(memory.recommendations.contains(&general[1]), "{}", record.name);
        }
    }
}
