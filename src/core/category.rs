/// Food categories — the bucket that selects the middle phrase pool.
use serde::{Deserialize, Serialize};

/// Which middle pool a food label draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Coffee,
    Noodles,
    Fresh,
    Comfort,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 4] = [
        FoodCategory::Coffee,
        FoodCategory::Noodles,
        FoodCategory::Fresh,
        FoodCategory::Comfort,
    ];

    /// Resolve a free-form food label to a category.
    ///
    /// Case-insensitive substring match, checked in order: "coffee",
    /// "noodle", then any of "sushi" / "salad" / "bento". Anything else
    /// is comfort food.
    pub fn from_label(label: &str) -> FoodCategory {
        let v = label.trim().to_lowercase();

        if v.contains("coffee") {
            return FoodCategory::Coffee;
        }
        if v.contains("noodle") {
            return FoodCategory::Noodles;
        }
        if ["sushi", "salad", "bento"].iter().any(|w| v.contains(w)) {
            return FoodCategory::Fresh;
        }

        FoodCategory::Comfort
    }

    /// Returns the pool key for this category (e.g., "noodles").
    pub fn key(&self) -> &'static str {
        match self {
            Self::Coffee => "coffee",
            Self::Noodles => "noodles",
            Self::Fresh => "fresh",
            Self::Comfort => "comfort",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coffee_anywhere_in_label() {
        assert_eq!(FoodCategory::from_label("Coffee"), FoodCategory::Coffee);
        assert_eq!(FoodCategory::from_label("iced COFFEE latte"), FoodCategory::Coffee);
    }

    #[test]
    fn noodle_singular_and_plural() {
        assert_eq!(FoodCategory::from_label("Noodles"), FoodCategory::Noodles);
        assert_eq!(FoodCategory::from_label("cup noodle"), FoodCategory::Noodles);
    }

    #[test]
    fn fresh_words() {
        for label in ["Sushi", "Salad", "Bento", "salmon sushi roll"] {
            assert_eq!(FoodCategory::from_label(label), FoodCategory::Fresh, "{label}");
        }
    }

    #[test]
    fn first_match_wins() {
        // coffee is checked before noodle, noodle before the fresh words
        assert_eq!(FoodCategory::from_label("coffee noodles"), FoodCategory::Coffee);
        assert_eq!(FoodCategory::from_label("noodle salad"), FoodCategory::Noodles);
        assert_eq!(FoodCategory::from_label("coffee bento"), FoodCategory::Coffee);
    }

    #[test]
    fn everything_else_is_comfort() {
        for label in ["Taco", "Pizza", "Rice Ball", "", "   "] {
            assert_eq!(FoodCategory::from_label(label), FoodCategory::Comfort, "{label:?}");
        }
    }

    #[test]
    fn keys_match_serde_names() {
        for cat in FoodCategory::ALL {
            let ron = ron::to_string(&cat).unwrap();
            assert_eq!(ron, cat.key());
        }
    }
}
