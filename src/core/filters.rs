use crate::core::tags::slugify;
use crate::models::{Destination, TravelPreferences, ANY_COUNTRY};

/// Check if a destination is in the requested country
///
/// This is Stage 1 of the recommendation pipeline. No country preference,
/// or the "any" sentinel, passes everything.
#[inline]
pub fn matches_country(dest: &Destination, prefs: &TravelPreferences) -> bool {
    match prefs.country.as_deref() {
        Some(country) if country != ANY_COUNTRY => slugify(&dest.country) == country,
        _ => true,
    }
}

/// Check if a destination's tier price is within the hard budget ceiling
///
/// This is Stage 2. The ceiling is the filter ceiling, not the scorer's
/// nominal one; Luxury has no ceiling and passes everything.
#[inline]
pub fn within_budget(dest: &Destination, prefs: &TravelPreferences) -> bool {
    let Some(tier) = prefs.budget else {
        return true;
    };
    match tier.filter_ceiling() {
        Some(ceiling) => tier.select_price(&dest.price) <= ceiling,
        None => true,
    }
}

/// Combined hard-constraint check. Everything else about a destination is
/// soft and handled by scoring.
#[inline]
pub fn matches_hard_constraints(dest: &Destination, prefs: &TravelPreferences) -> bool {
    matches_country(dest, prefs) && within_budget(dest, prefs)
}

/// Filter a catalog down to the destinations passing the hard constraints,
/// preserving catalog order
pub fn filter_catalog(catalog: &[Destination], prefs: &TravelPreferences) -> Vec<Destination> {
    catalog
        .iter()
        .filter(|dest| matches_hard_constraints(dest, prefs))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetTier, PriceTiers, Season};
    use std::collections::BTreeSet;

    fn create_test_destination(name: &str, country: &str, budget_price: u32) -> Destination {
        Destination {
            id: 1,
            name: name.to_string(),
            country: country.to_string(),
            continent: "Asia".to_string(),
            price: PriceTiers {
                budget: budget_price,
                mid: budget_price * 2,
                luxury: budget_price * 4,
            },
            best_time: [Season::Spring].into_iter().collect(),
            rating: 4.5,
            reviews: 1000,
            highlights: vec![],
            activities: BTreeSet::new(),
            travel_styles: BTreeSet::new(),
            flight_price: 40_000,
        }
    }

    #[test]
    fn test_country_match() {
        let dest = create_test_destination("Kyoto", "Japan", 80_000);

        let prefs = TravelPreferences {
            country: Some("japan".to_string()),
            ..Default::default()
        };
        assert!(matches_country(&dest, &prefs));

        let prefs = TravelPreferences {
            country: Some("peru".to_string()),
            ..Default::default()
        };
        assert!(!matches_country(&dest, &prefs));
    }

    #[test]
    fn test_country_any_and_absent_pass() {
        let dest = create_test_destination("Kyoto", "Japan", 80_000);

        let any = TravelPreferences {
            country: Some("any".to_string()),
            ..Default::default()
        };
        assert!(matches_country(&dest, &any));
        assert!(matches_country(&dest, &TravelPreferences::default()));
    }

    #[test]
    fn test_country_multi_word_slug() {
        let dest = create_test_destination("Queenstown", "New Zealand", 160_000);
        let prefs = TravelPreferences {
            country: Some("new-zealand".to_string()),
            ..Default::default()
        };

        assert!(matches_country(&dest, &prefs));
    }

    #[test]
    fn test_budget_ceiling() {
        let cheap = create_test_destination("Bali", "Indonesia", 60_000);
        let pricey = create_test_destination("Paris", "France", 120_000);
        let prefs = TravelPreferences {
            budget: Some(BudgetTier::Budget),
            ..Default::default()
        };

        assert!(within_budget(&cheap, &prefs));
        assert!(!within_budget(&pricey, &prefs));
    }

    #[test]
    fn test_budget_ceiling_boundary_inclusive() {
        let at_ceiling = create_test_destination("Santorini", "Greece", 100_000);
        let prefs = TravelPreferences {
            budget: Some(BudgetTier::Budget),
            ..Default::default()
        };

        assert!(within_budget(&at_ceiling, &prefs));
    }

    #[test]
    fn test_luxury_has_no_ceiling() {
        let pricey = create_test_destination("Maldives", "Maldives", 150_000);
        let prefs = TravelPreferences {
            budget: Some(BudgetTier::Luxury),
            ..Default::default()
        };

        assert!(within_budget(&pricey, &prefs));
    }

    #[test]
    fn test_filter_catalog_preserves_order() {
        let catalog = vec![
            create_test_destination("Bali", "Indonesia", 60_000),
            create_test_destination("Paris", "France", 120_000),
            create_test_destination("Kyoto", "Japan", 80_000),
        ];
        let prefs = TravelPreferences {
            budget: Some(BudgetTier::Budget),
            ..Default::default()
        };

        let kept = filter_catalog(&catalog, &prefs);
        let names: Vec<&str> = kept.iter().map(|d| d.name.as_str()).collect();

        assert_eq!(names, vec!["Bali", "Kyoto"]);
    }

    #[test]
    fn test_empty_preferences_filter_nothing() {
        let catalog = vec![
            create_test_destination("Bali", "Indonesia", 60_000),
            create_test_destination("Paris", "France", 120_000),
        ];

        let kept = filter_catalog(&catalog, &TravelPreferences::default());
        assert_eq!(kept.len(), 2);
    }
}
