//! Recommendation Pools
//!
//! Fixed advice strings keyed by a tagged topic. Keeping the mapping as an
//! exhaustive `match` means a topic without a pool cannot compile, so there
//! is no runtime fallback path.
//!
//! Pool order matters: rules draw either the full pool (category topics) or
//! a leading slice of it (threshold topics).

/// Topic tag selecting a recommendation pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdviceTopic {
    General,
    Vegetable,
    Fruit,
    HighProtein,
    HighCarbohydrate,
    HighFiber,
    Hydration,
}

impl AdviceTopic {
    /// Ordered advice lines for this topic.
    pub fn pool(&self) -> &'static [&'static str] {
        match self {
            AdviceTopic::General => &[
                "Kesehatan tubuh optimal dapat dicapai melalui pola makan seimbang dan teratur.",
                "Konsumsi makanan dengan kombinasi karbohidrat, protein, lemak sehat, vitamin, dan mineral.",
                "Minum air putih secara teratur untuk menjaga keseimbangan cairan tubuh.",
                "Mengatur porsi makan dengan prinsip \"setengah piring sayur dan buah\".",
                "Istirahat cukup dan pengelolaan stres adalah bagian dari gaya hidup sehat.",
            ],
            AdviceTopic::Vegetable => &[
                "Sayuran kaya serat yang membantu pencernaan dan kesehatan usus.",
                "Konsumsi sayuran beragam warna untuk berbagai vitamin dan mineral.",
                "Sayuran hijau mengandung antioksidan yang melindungi sel tubuh.",
            ],
            AdviceTopic::Fruit => &[
                "Buah-buahan adalah sumber vitamin C alami untuk sistem kekebalan tubuh.",
                "Konsumsi buah utuh lebih baik daripada jus karena lebih banyak serat.",
                "Buah segar memberikan energi alami dan menjaga hidrasi tubuh.",
            ],
            AdviceTopic::HighProtein => &[
                "Protein penting untuk membangun dan memperbaiki jaringan tubuh.",
                "Pilih sumber protein rendah lemak untuk kesehatan jantung.",
                "Kombinasikan protein hewani dan nabati untuk asam amino lengkap.",
            ],
            AdviceTopic::HighCarbohydrate => &[
                "Pilih karbohidrat kompleks untuk energi yang lebih tahan lama.",
                "Karbohidrat adalah sumber energi utama untuk aktivitas harian.",
                "Batasi karbohidrat sederhana untuk menjaga kadar gula darah stabil.",
            ],
            AdviceTopic::HighFiber => &[
                "Serat membantu melancarkan pencernaan dan mencegah sembelit.",
                "Konsumsi serat cukup dapat menurunkan risiko penyakit jantung.",
                "Serat membantu mengontrol berat badan dengan memberikan rasa kenyang lebih lama.",
            ],
            AdviceTopic::Hydration => &[
                "Makanan tinggi air membantu menjaga hidrasi tubuh.",
                "Hidrasi baik mendukung fungsi organ dan metabolisme tubuh.",
                "Air membantu transportasi nutrisi ke seluruh tubuh.",
            ],
        }
    }
}

// ============================================================================
// SINGLE-LINE ADVICE
// Threshold rules that add one fixed line rather than drawing from a pool.
// ============================================================================

pub const LOW_CALORIE_DIET: &str = "Cocok untuk program diet rendah kalori.";
pub const HIGH_CALORIE_PORTION: &str =
    "Konsumsi dalam porsi yang tepat untuk mengontrol asupan kalori.";
pub const LOW_CARB_DIET: &str = "Cocok untuk diet rendah karbohidrat.";
pub const LOW_FAT_CHOICE: &str = "Pilihan baik untuk diet rendah lemak.";
pub const HIGH_FAT_PORTION: &str =
    "Perhatikan porsi konsumsi untuk mengontrol asupan lemak.";
pub const HIGH_VITAMIN_C_IMMUNITY: &str =
    "Vitamin C tinggi meningkatkan sistem kekebalan tubuh.";
