use std::collections::BTreeSet;

use crate::models::plant::Plant;

/// How far a bed's pH may drift from a plant's preference and still suit it.
pub const PH_TOLERANCE: f64 = 1.5;

/// True when a bed's environment suits the plant. Checks short-circuit in
/// order: exact sun match, shared soil tag, pH within [`PH_TOLERANCE`].
/// Room is a separate concern and is not considered here.
pub fn environment_suits(
    sun_amount: &str,
    soil_type: &BTreeSet<String>,
    ph: f64,
    plant: &Plant,
) -> bool {
    if sun_amount != plant.sun_requirement {
        return false;
    }
    if soil_type.intersection(&plant.preferred_soil).next().is_none() {
        return false;
    }
    if (ph - plant.preferred_ph).abs() > PH_TOLERANCE {
        return false;
    }
    true
}
