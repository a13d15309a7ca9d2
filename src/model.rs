//! Hand-coded linear price model with per-town location factors

/// Base price before any per-room or per-area contribution
pub const BASE_PRICE: f64 = 1000.0;

/// Price contribution per room
pub const ROOM_COEFFICIENT: f64 = 200.0;

/// Price contribution per square meter of floor area
pub const AREA_COEFFICIENT: f64 = 10.0;

/// Multiplier used for towns without an entry in the factor table
pub const DEFAULT_LOCATION_FACTOR: f64 = 1.0;

/// Per-town multipliers applied on top of the base linear estimate
static LOCATION_FACTORS: [(&str, f64); 4] = [
    ("Zürich", 1.5),
    ("Kloten", 1.2),
    ("Uster", 1.3),
    ("Illnau-Effretikon", 1.1),
];

/// Look up the location multiplier for a town
///
/// Unrecognized towns are not an error; they resolve to the neutral
/// [`DEFAULT_LOCATION_FACTOR`].
pub fn location_factor(town: &str) -> f64 {
    LOCATION_FACTORS
        .iter()
        .find(|(name, _)| *name == town)
        .map_or(DEFAULT_LOCATION_FACTOR, |(_, factor)| *factor)
}

/// Towns with a dedicated location factor, in table order
pub fn known_towns() -> impl Iterator<Item = &'static str> {
    LOCATION_FACTORS.iter().map(|(name, _)| *name)
}

/// Estimate an apartment price from room count, floor area and town
///
/// # Arguments
/// * `rooms` - Number of rooms
/// * `area` - Floor area in square meters
/// * `town` - Town name; unknown towns fall back to the neutral factor
///
/// # Returns
/// * `(1000 + rooms * 200 + area * 10) * location_factor(town)`
///
/// Inputs are not range-checked at this layer; negative rooms or area yield
/// mathematically valid but meaningless prices.
pub fn estimate_price(rooms: f64, area: f64, town: &str) -> f64 {
    let price = BASE_PRICE + rooms * ROOM_COEFFICIENT + area * AREA_COEFFICIENT;
    price * location_factor(town)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_zurich() {
        // 1000 + 3*200 + 100*10 = 2600, scaled by the 1.5 Zürich factor
        assert_eq!(estimate_price(3.0, 100.0, "Zürich"), 3900.0);
    }

    #[test]
    fn test_factor_table_entries() {
        assert_eq!(location_factor("Zürich"), 1.5);
        assert_eq!(location_factor("Kloten"), 1.2);
        assert_eq!(location_factor("Uster"), 1.3);
        assert_eq!(location_factor("Illnau-Effretikon"), 1.1);
    }

    #[test]
    fn test_unknown_town_uses_neutral_factor() {
        assert_eq!(location_factor("Atlantis"), DEFAULT_LOCATION_FACTOR);
        assert_eq!(estimate_price(2.0, 80.0, "Atlantis"), 1000.0 + 400.0 + 800.0);
    }

    #[test]
    fn test_town_lookup_is_exact_match() {
        // Lookup is case- and whitespace-sensitive
        assert_eq!(location_factor("zürich"), DEFAULT_LOCATION_FACTOR);
        assert_eq!(location_factor(" Uster"), DEFAULT_LOCATION_FACTOR);
    }

    #[test]
    fn test_base_price_per_town() {
        for town in known_towns() {
            assert_eq!(
                estimate_price(0.0, 0.0, town),
                BASE_PRICE * location_factor(town)
            );
        }
    }

    #[test]
    fn test_known_towns_order() {
        let towns: Vec<&str> = known_towns().collect();
        assert_eq!(towns, vec!["Zürich", "Kloten", "Uster", "Illnau-Effretikon"]);
    }

    #[test]
    fn test_negative_inputs_are_not_guarded() {
        // Documented limitation: the formula extrapolates below zero
        assert!(estimate_price(-10.0, -200.0, "Uster") < 0.0);
    }
}
