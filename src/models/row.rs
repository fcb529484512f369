use std::fmt;

use serde::Serialize;

use crate::models::plant::Plant;

/// Lifecycle of a row. The transition is one-way: a row is finalized exactly
/// once, when its bed opens the next row below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RowState {
    Open,
    Finalized,
}

/// A one-dimensional shelf inside a bed that packs plants left to right.
///
/// Packing is greedy and single-pass: plants land strictly in the order they
/// are offered and earlier gaps are never reconsidered. This trades packing
/// density for O(1) insertion and a deterministic, order-dependent layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GardenRow {
    plants: Vec<Plant>,
    max_length: usize,
    max_width: usize,
    current_length: usize,
    current_width: usize,
    state: RowState,
}

impl GardenRow {
    pub fn new(max_length: usize, max_width: usize) -> Self {
        Self {
            plants: Vec::new(),
            max_length,
            max_width,
            current_length: 0,
            current_width: 0,
            state: RowState::Open,
        }
    }

    /// True when the plant fits: the row is still open, there is length left
    /// for it, and it is no taller than the row's capacity.
    pub fn can_add_plant(&self, plant: &Plant) -> bool {
        if self.state == RowState::Finalized {
            return false;
        }
        if self.current_length + plant.size > self.max_length {
            return false;
        }
        if plant.size > self.max_width {
            return false;
        }
        true
    }

    /// Appends the plant at the right end of the shelf. A rejected plant is
    /// handed back untouched and the row is left exactly as it was.
    pub fn add_plant(&mut self, plant: Plant) -> Result<(), Plant> {
        if !self.can_add_plant(&plant) {
            return Err(plant);
        }
        self.current_length += plant.size;
        self.current_width = self.current_width.max(plant.size);
        self.plants.push(plant);
        Ok(())
    }

    /// One-way transition to [`RowState::Finalized`], freezing `max_width` to
    /// the row's actual height. Calling it again is a no-op.
    pub fn finalize(&mut self) {
        if self.state == RowState::Finalized {
            return;
        }
        self.max_width = self.current_width;
        self.state = RowState::Finalized;
    }

    pub fn is_finalized(&self) -> bool {
        self.state == RowState::Finalized
    }

    pub fn state(&self) -> RowState {
        self.state
    }

    /// Placed plants, in left-to-right order.
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn max_width(&self) -> usize {
        self.max_width
    }

    pub fn current_length(&self) -> usize {
        self.current_length
    }

    /// The row's actual height: the size of its largest plant so far.
    pub fn current_width(&self) -> usize {
        self.current_width
    }
}

/// Renders the shelf as `current_width` framed lines. Each plant draws its
/// symbol `size` times on the first `size` lines and blanks above that, so
/// shorter plants leave headroom under taller neighbours.
impl fmt::Display for GardenRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled: usize = self.plants.iter().map(|p| p.size).sum();
        for depth in 1..=self.current_width {
            let mut line = String::with_capacity(self.max_length);
            for plant in &self.plants {
                let glyph = if plant.size >= depth { plant.symbol } else { ' ' };
                for _ in 0..plant.size {
                    line.push(glyph);
                }
            }
            for _ in filled..self.max_length {
                line.push(' ');
            }
            if depth > 1 {
                writeln!(f)?;
            }
            write!(f, "|{line}|")?;
        }
        Ok(())
    }
}
