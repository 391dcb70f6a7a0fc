//! Maximum U-values per building element and climate zone, in W/(m²·K)

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::category::Category;
use crate::climate::ClimateZone;
use crate::error::EvaluationError;

const WALL_U_VALUES: [(ClimateZone, f64); 24] = [
    // Tropical
    (ClimateZone::Af, 0.9),
    (ClimateZone::Am, 1.0),
    (ClimateZone::Aw, 1.1),
    (ClimateZone::As, 1.1),
    // Dry
    (ClimateZone::BWh, 1.0),
    (ClimateZone::BWk, 1.2),
    (ClimateZone::BSh, 1.2),
    (ClimateZone::BSk, 1.5),
    // Temperate
    (ClimateZone::Cfa, 1.4),
    (ClimateZone::Cfb, 1.3),
    (ClimateZone::Cfc, 1.2),
    (ClimateZone::Csa, 1.51),
    (ClimateZone::Csb, 1.4),
    (ClimateZone::Csc, 1.3),
    // Continental
    (ClimateZone::Dfa, 1.3),
    (ClimateZone::Dfb, 1.2),
    (ClimateZone::Dfc, 0.7),
    (ClimateZone::Dfd, 0.6),
    (ClimateZone::Dsa, 1.2),
    (ClimateZone::Dsb, 1.1),
    (ClimateZone::Dsc, 0.9),
    (ClimateZone::Dsd, 0.8),
    // Polar
    (ClimateZone::ET, 0.5),
    (ClimateZone::EF, 0.4),
];

const WINDOW_U_VALUES: [(ClimateZone, f64); 24] = [
    // Tropical
    (ClimateZone::Af, 0.8),
    (ClimateZone::Am, 0.8),
    (ClimateZone::Aw, 0.9),
    (ClimateZone::As, 0.9),
    // Dry
    (ClimateZone::BWh, 0.7),
    (ClimateZone::BWk, 0.9),
    (ClimateZone::BSh, 0.8),
    (ClimateZone::BSk, 0.85),
    // Temperate
    (ClimateZone::Cfa, 0.6),
    (ClimateZone::Cfb, 0.7),
    (ClimateZone::Cfc, 0.75),
    (ClimateZone::Csa, 0.55),
    (ClimateZone::Csb, 0.65),
    (ClimateZone::Csc, 0.7),
    // Continental
    (ClimateZone::Dfa, 0.75),
    (ClimateZone::Dfb, 0.8),
    (ClimateZone::Dfc, 0.5),
    (ClimateZone::Dfd, 0.45),
    (ClimateZone::Dsa, 0.7),
    (ClimateZone::Dsb, 0.65),
    (ClimateZone::Dsc, 0.55),
    (ClimateZone::Dsd, 0.5),
    // Polar
    (ClimateZone::ET, 0.3),
    (ClimateZone::EF, 0.25),
];

const ROOF_U_VALUES: [(ClimateZone, f64); 24] = [
    // Tropical
    (ClimateZone::Af, 1.2),
    (ClimateZone::Am, 1.3),
    (ClimateZone::Aw, 1.4),
    (ClimateZone::As, 1.4),
    // Dry
    (ClimateZone::BWh, 1.1),
    (ClimateZone::BWk, 1.3),
    (ClimateZone::BSh, 1.2),
    (ClimateZone::BSk, 1.3),
    // Temperate
    (ClimateZone::Cfa, 1.1),
    (ClimateZone::Cfb, 1.0),
    (ClimateZone::Cfc, 0.9),
    (ClimateZone::Csa, 1.2),
    (ClimateZone::Csb, 1.1),
    (ClimateZone::Csc, 1.0),
    // Continental
    (ClimateZone::Dfa, 1.0),
    (ClimateZone::Dfb, 0.9),
    (ClimateZone::Dfc, 0.6),
    (ClimateZone::Dfd, 0.5),
    (ClimateZone::Dsa, 0.9),
    (ClimateZone::Dsb, 0.8),
    (ClimateZone::Dsc, 0.7),
    (ClimateZone::Dsd, 0.6),
    // Polar
    (ClimateZone::ET, 0.4),
    (ClimateZone::EF, 0.35),
];

lazy_static! {
    static ref MAX_U_VALUES: HashMap<(Category, ClimateZone), f64> = {
        let mut table = HashMap::new();
        for (category, rows) in [
            (Category::Wall, &WALL_U_VALUES),
            (Category::Window, &WINDOW_U_VALUES),
            (Category::Roof, &ROOF_U_VALUES),
        ] {
            for &(zone, limit) in rows.iter() {
                table.insert((category, zone), limit);
            }
        }
        table
    };
}

/// Maximum allowed U-value for a category in a climate zone
pub fn threshold_for(category: Category, zone: ClimateZone) -> Result<f64, EvaluationError> {
    MAX_U_VALUES
        .get(&(category, zone))
        .copied()
        .ok_or(EvaluationError::UnknownZoneOrCategory { category, zone })
}
