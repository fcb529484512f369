use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single plant waiting to be (or already) placed in a garden row.
///
/// A plant occupies a square footprint of `size` × `size` cells and carries
/// the environmental requirements a bed must satisfy before accepting it.
/// Plants are plain values: once constructed they are never mutated, and the
/// engine performs no range validation on them (that is the caller's job).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub name: String,
    /// Single display glyph used by the ASCII rendering.
    pub symbol: char,
    pub size: usize,
    pub preferred_ph: f64,
    pub preferred_soil: BTreeSet<String>,
    /// Categorical sun tag, matched exactly against the bed's `sun_amount`.
    pub sun_requirement: String,
}

impl Plant {
    pub fn new(
        name: impl Into<String>,
        symbol: char,
        size: usize,
        preferred_ph: f64,
        preferred_soil: BTreeSet<String>,
        sun_requirement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol,
            size,
            preferred_ph,
            preferred_soil,
            sun_requirement: sun_requirement.into(),
        }
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.symbol, self.size, self.size)
    }
}
