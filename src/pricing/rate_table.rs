//! Rate table configuration.
//!
//! The table is an immutable value injected into the engine at
//! construction. A compiled-in default carries the house rates; a
//! deployment can deserialize its own table from JSON instead and the
//! engine never knows the difference.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::models::{PeriodType, PricingModel};

/// Nightly rates for one (category, period) combination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TierRates {
    /// Base rate with one adult included (tiered categories).
    #[serde(default)]
    pub single: Decimal,
    /// Base rate with two adults included (tiered categories).
    #[serde(default)]
    pub couple: Decimal,
    /// Rate per guest (per-person categories).
    #[serde(default)]
    pub per_person: Decimal,
    /// Added per extra adult; children aged 6-12 pay half of it.
    #[serde(default)]
    pub surcharge: Decimal,
    /// Flat rate replacing the whole stay for 2 nights, 2 adults, no
    /// children aged 6-12.
    #[serde(default)]
    pub two_night_package: Option<Decimal>,
}

/// All rates for one accommodation category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryRates {
    #[serde(default)]
    pub pricing_model: PricingModel,
    #[serde(default)]
    pub weekday: TierRates,
    #[serde(default)]
    pub weekend: TierRates,
}

impl CategoryRates {
    pub fn for_period(&self, period: PeriodType) -> &TierRates {
        match period {
            PeriodType::Weekday => &self.weekday,
            PeriodType::Weekend => &self.weekend,
        }
    }
}

/// Category key -> rates for every period type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    categories: HashMap<String, CategoryRates>,
}

impl RateTable {
    pub fn new(categories: HashMap<String, CategoryRates>) -> Self {
        Self { categories }
    }

    pub fn get(&self, category: &str) -> Option<&CategoryRates> {
        self.categories.get(category)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// The house rates shipped with the engine.
    pub fn default_table() -> Self {
        let mut categories = HashMap::new();

        categories.insert(
            "quarto".to_string(),
            CategoryRates {
                pricing_model: PricingModel::Tiered,
                weekday: TierRates {
                    single: dec!(180),
                    couple: dec!(220),
                    per_person: Decimal::ZERO,
                    surcharge: dec!(115),
                    two_night_package: Some(dec!(400)),
                },
                weekend: TierRates {
                    single: dec!(220),
                    couple: dec!(270),
                    per_person: Decimal::ZERO,
                    surcharge: dec!(135),
                    two_night_package: Some(dec!(500)),
                },
            },
        );

        categories.insert(
            "quarto_familia".to_string(),
            CategoryRates {
                pricing_model: PricingModel::Tiered,
                weekday: TierRates {
                    single: dec!(230),
                    couple: dec!(290),
                    per_person: Decimal::ZERO,
                    surcharge: dec!(120),
                    two_night_package: Some(dec!(540)),
                },
                weekend: TierRates {
                    single: dec!(270),
                    couple: dec!(340),
                    per_person: Decimal::ZERO,
                    surcharge: dec!(140),
                    two_night_package: Some(dec!(640)),
                },
            },
        );

        categories.insert(
            "chale".to_string(),
            CategoryRates {
                pricing_model: PricingModel::Tiered,
                weekday: TierRates {
                    single: dec!(250),
                    couple: dec!(310),
                    per_person: Decimal::ZERO,
                    surcharge: dec!(130),
                    two_night_package: Some(dec!(580)),
                },
                weekend: TierRates {
                    single: dec!(300),
                    couple: dec!(370),
                    per_person: Decimal::ZERO,
                    surcharge: dec!(150),
                    two_night_package: Some(dec!(690)),
                },
            },
        );

        // Shared dormitory prices per head, no package rate
        categories.insert(
            "coletivo".to_string(),
            CategoryRates {
                pricing_model: PricingModel::PerPerson,
                weekday: TierRates {
                    single: Decimal::ZERO,
                    couple: Decimal::ZERO,
                    per_person: dec!(100),
                    surcharge: Decimal::ZERO,
                    two_night_package: None,
                },
                weekend: TierRates {
                    single: Decimal::ZERO,
                    couple: Decimal::ZERO,
                    per_person: dec!(120),
                    surcharge: Decimal::ZERO,
                    two_night_package: None,
                },
            },
        );

        Self { categories }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_categories() {
        let table = RateTable::default_table();
        for key in ["quarto", "quarto_familia", "chale", "coletivo"] {
            assert!(table.contains(key), "missing category {key}");
        }
        assert!(!table.contains("suite_master"));
    }

    #[test]
    fn test_default_table_known_rates() {
        let table = RateTable::default_table();

        let quarto = table.get("quarto").unwrap();
        assert_eq!(quarto.pricing_model, PricingModel::Tiered);
        assert_eq!(quarto.weekday.couple, dec!(220));
        assert_eq!(quarto.weekday.surcharge, dec!(115));

        let coletivo = table.get("coletivo").unwrap();
        assert_eq!(coletivo.pricing_model, PricingModel::PerPerson);
        assert_eq!(coletivo.weekday.per_person, dec!(100));
        assert!(coletivo.weekday.two_night_package.is_none());
    }

    #[test]
    fn test_table_from_json() {
        let json = r#"{
            "cabana": {
                "pricing_model": "tiered",
                "weekday": { "single": "150", "couple": "190", "surcharge": "80" },
                "weekend": { "single": "180", "couple": "230", "surcharge": "95",
                             "two_night_package": "420" }
            }
        }"#;

        let table: RateTable = serde_json::from_str(json).unwrap();
        let cabana = table.get("cabana").unwrap();
        assert_eq!(cabana.weekday.single, dec!(150));
        assert_eq!(cabana.weekday.two_night_package, None);
        assert_eq!(cabana.weekend.two_night_package, Some(dec!(420)));
        // unspecified tiers default to zero
        assert_eq!(cabana.weekday.per_person, Decimal::ZERO);
    }
}
