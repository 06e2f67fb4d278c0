//! Embedded Food Table
//!
//! Static nutrient data, one record per food, values per 100 g edible
//! portion. Strongly typed so a malformed entry fails at compile time
//! rather than at lookup time.
//!
//! Identifiers and nutrient names are the Indonesian strings the rest of
//! the system matches against ("Kalori", "Serat", "Air", ...).

use serde::Serialize;

/// Coarse food classification tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FoodCategory {
    /// Vegetables ("sayuran")
    Vegetable,
    /// Fruit ("buah")
    Fruit,
    /// Staples and other foods ("makanan")
    Staple,
}

impl FoodCategory {
    /// Display label as stored in the food table.
    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Vegetable => "sayuran",
            FoodCategory::Fruit => "buah",
            FoodCategory::Staple => "makanan",
        }
    }

    /// Parse a table label back into a tag. Exact match on the lowercase
    /// label, mirroring `label()`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "sayuran" => Some(FoodCategory::Vegetable),
            "buah" => Some(FoodCategory::Fruit),
            "makanan" => Some(FoodCategory::Staple),
            _ => None,
        }
    }

    /// All category tags, in table display order.
    pub fn all() -> &'static [FoodCategory] {
        &[
            FoodCategory::Vegetable,
            FoodCategory::Fruit,
            FoodCategory::Staple,
        ]
    }
}

/// A single named nutrient amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutrient {
    pub name: &'static str,
    pub amount: f64,
}

/// One food entry: identifier, category tag, nutrient amounts and the
/// per-record display-unit overrides (partial; unlisted nutrients resolve
/// through the default unit table).
#[derive(Debug, Clone, Copy)]
pub struct FoodRecord {
    /// Lowercase identifier used for lookup.
    pub name: &'static str,
    pub category: FoodCategory,
    pub nutrients: &'static [Nutrient],
    pub unit_overrides: &'static [(&'static str, &'static str)],
}

impl FoodRecord {
    /// Amount of a nutrient, or `None` if the record does not report it.
    pub fn reported(&self, nutrient: &str) -> Option<f64> {
        self.nutrients
            .iter()
            .find(|n| n.name == nutrient)
            .map(|n| n.amount)
    }

    /// Amount of a nutrient, reading unreported nutrients as 0.
    pub fn amount_of(&self, nutrient: &str) -> f64 {
        self.reported(nutrient).unwrap_or(0.0)
    }

    /// Per-record display-unit override for a nutrient, if any.
    pub fn unit_override(&self, nutrient: &str) -> Option<&'static str> {
        self.unit_overrides
            .iter()
            .find(|(name, _)| *name == nutrient)
            .map(|(_, unit)| *unit)
    }
}

// ============================================================================
// EMBEDDED FOOD DATA
// ============================================================================

pub static FOODS: &[FoodRecord] = &[
    // Sayuran
    FoodRecord {
        name: "tomat",
        category: FoodCategory::Vegetable,
        nutrients: &[
            Nutrient { name: "Kalori", amount: 18.0 },
            Nutrient { name: "Karbohidrat", amount: 3.9 },
            Nutrient { name: "Protein", amount: 0.9 },
            Nutrient { name: "Lemak", amount: 0.2 },
            Nutrient { name: "Serat", amount: 1.2 },
            Nutrient { name: "Vitamin C", amount: 14.0 },
            Nutrient { name: "Air", amount: 95.0 },
        ],
        unit_overrides: &[("Kalori", "kcal"), ("Vitamin C", "mg"), ("Air", "%")],
    },
    FoodRecord {
        name: "wortel",
        category: FoodCategory::Vegetable,
        nutrients: &[
            Nutrient { name: "Kalori", amount: 41.0 },
            Nutrient { name: "Karbohidrat", amount: 9.6 },
            Nutrient { name: "Protein", amount: 0.9 },
            Nutrient { name: "Lemak", amount: 0.2 },
            Nutrient { name: "Serat", amount: 2.8 },
            Nutrient { name: "Vitamin A", amount: 835.0 },
            Nutrient { name: "Air", amount: 88.0 },
        ],
        unit_overrides: &[("Kalori", "kcal"), ("Vitamin A", "mcg"), ("Air", "%")],
    },
    FoodRecord {
        name: "brokoli",
        category: FoodCategory::Vegetable,
        nutrients: &[
            Nutrient { name: "Kalori", amount: 34.0 },
            Nutrient { name: "Karbohidrat", amount: 7.0 },
            Nutrient { name: "Protein", amount: 2.8 },
            Nutrient { name: "Lemak", amount: 0.4 },
            Nutrient { name: "Serat", amount: 2.6 },
            Nutrient { name: "Vitamin C", amount: 89.0 },
            Nutrient { name: "Kalsium", amount: 47.0 },
        ],
        unit_overrides: &[("Kalori", "kcal"), ("Vitamin C", "mg"), ("Kalsium", "mg")],
    },
    FoodRecord {
        name: "bayam",
        category: FoodCategory::Vegetable,
        nutrients: &[
            Nutrient { name: "Kalori", amount: 23.0 },
            Nutrient { name: "Karbohidrat", amount: 3.6 },
            Nutrient { name: "Protein", amount: 2.9 },
            Nutrient { name: "Lemak", amount: 0.4 },
            Nutrient { name: "Serat", amount: 2.2 },
            Nutrient { name: "Zat Besi", amount: 2.7 },
            Nutrient { name: "Vitamin K", amount: 483.0 },
        ],
        unit_overrides: &[("Kalori", "kcal"), ("Zat Besi", "mg"), ("Vitamin K", "mcg")],
    },
    // Buah
    FoodRecord {
        name: "apel",
        category: FoodCategory::Fruit,
        nutrients: &[
            Nutrient { name: "Kalori", amount: 52.0 },
            Nutrient { name: "Karbohidrat", amount: 14.0 },
            Nutrient { name: "Protein", amount: 0.3 },
            Nutrient { name: "Lemak", amount: 0.2 },
            Nutrient { name: "Serat", amount: 2.4 },
            Nutrient { name: "Vitamin C", amount: 5.0 },
            Nutrient { name: "Air", amount: 86.0 },
        ],
        unit_overrides: &[("Kalori", "kcal"), ("Vitamin C", "mg"), ("Air", "%")],
    },
    FoodRecord {
        name: "pisang",
        category: FoodCategory::Fruit,
        nutrients: &[
            Nutrient { name: "Kalori", amount: 89.0 },
            Nutrient { name: "Karbohidrat", amount: 23.0 },
            Nutrient { name: "Protein", amount: 1.1 },
            Nutrient { name: "Lemak", amount: 0.3 },
            Nutrient { name: "Serat", amount: 2.6 },
            Nutrient { name: "Kalium", amount: 358.0 },
            Nutrient { name: "Vitamin B6", amount: 0.4 },
        ],
        unit_overrides: &[("Kalori", "kcal"), ("Kalium", "mg"), ("Vitamin B6", "mg")],
    },
    FoodRecord {
        name: "jeruk",
        category: FoodCategory::Fruit,
        nutrients: &[
            Nutrient { name: "Kalori", amount: 47.0 },
            Nutrient { name: "Karbohidrat", amount: 12.0 },
            Nutrient { name: "Protein", amount: 0.9 },
            Nutrient { name: "Lemak", amount: 0.1 },
            Nutrient { name: "Serat", amount: 2.4 },
            Nutrient { name: "Vitamin C", amount: 53.0 },
            Nutrient { name: "Folat", amount: 30.0 },
        ],
        unit_overrides: &[("Kalori", "kcal"), ("Vitamin C", "mg"), ("Folat", "mcg")],
    },
    FoodRecord {
        name: "mangga",
        category: FoodCategory::Fruit,
        nutrients: &[
            Nutrient { name: "Kalori", amount: 60.0 },
            Nutrient { name: "Karbohidrat", amount: 15.0 },
            Nutrient { name: "Protein", amount: 0.8 },
            Nutrient { name: "Lemak", amount: 0.4 },
            Nutrient { name: "Serat", amount: 1.6 },
            Nutrient { name: "Vitamin A", amount: 54.0 },
            Nutrient { name: "Vitamin C", amount: 36.0 },
        ],
        unit_overrides: &[("Kalori", "kcal"), ("Vitamin A", "mcg"), ("Vitamin C", "mg")],
    },
    // Makanan lain
    FoodRecord {
        name: "nasi",
        category: FoodCategory::Staple,
        nutrients: &[
            Nutrient { name: "Kalori", amount: 130.0 },
            Nutrient { name: "Karbohidrat", amount: 28.0 },
            Nutrient { name: "Protein", amount: 2.7 },
            Nutrient { name: "Lemak", amount: 0.3 },
            Nutrient { name: "Serat", amount: 0.4 },
            Nutrient { name: "Zat Besi", amount: 0.2 },
            Nutrient { name: "Vitamin B1", amount: 0.02 },
        ],
        unit_overrides: &[("Kalori", "kcal"), ("Zat Besi", "mg"), ("Vitamin B1", "mg")],
    },
    FoodRecord {
        name: "ayam",
        category: FoodCategory::Staple,
        nutrients: &[
            Nutrient { name: "Kalori", amount: 165.0 },
            Nutrient { name: "Karbohidrat", amount: 0.0 },
            Nutrient { name: "Protein", amount: 31.0 },
            Nutrient { name: "Lemak", amount: 3.6 },
            Nutrient { name: "Serat", amount: 0.0 },
            Nutrient { name: "Zat Besi", amount: 0.9 },
            Nutrient { name: "Vitamin B12", amount: 0.3 },
        ],
        unit_overrides: &[("Kalori", "kcal"), ("Zat Besi", "mg"), ("Vitamin B12", "mcg")],
    },
    FoodRecord {
        name: "telur",
        category: FoodCategory::Staple,
        nutrients: &[
            Nutrient { name: "Kalori", amount: 155.0 },
            Nutrient { name: "Karbohidrat", amount: 1.1 },
            Nutrient { name: "Protein", amount: 13.0 },
            Nutrient { name: "Lemak", amount: 11.0 },
            Nutrient { name: "Serat", amount: 0.0 },
            Nutrient { name: "Vitamin D", amount: 2.0 },
            Nutrient { name: "Vitamin B12", amount: 0.9 },
        ],
        unit_overrides: &[("Kalori", "kcal"), ("Vitamin D", "mcg"), ("Vitamin B12", "mcg")],
    },
    FoodRecord {
        name: "ikan",
        category: FoodCategory::Staple,
        nutrients: &[
            Nutrient { name: "Kalori", amount: 206.0 },
            Nutrient { name: "Karbohidrat", amount: 0.0 },
            Nutrient { name: "Protein", amount: 22.0 },
            Nutrient { name: "Lemak", amount: 12.0 },
            Nutrient { name: "Omega-3", amount: 2.3 },
            Nutrient { name: "Vitamin D", amount: 10.0 },
            Nutrient { name: "Selenium", amount: 36.0 },
        ],
        unit_overrides: &[("Kalori", "kcal"), ("Vitamin D", "mcg"), ("Selenium", "mcg")],
    },
];
