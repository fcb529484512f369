use std::fmt;

use serde::Serialize;

use crate::models::bed::GardenBed;
use crate::models::{BedId, Matrix};

/// Hard cap on the number of beds a garden will ever hold.
pub const MAX_BEDS: usize = 10;

/// The top-level occupancy grid. Cells hold indices into the garden's bed
/// list rather than references, so a bed spanning many cells has exactly one
/// owner. Beds are only ever added; nothing is removed or moved.
#[derive(Debug, Clone, Serialize)]
pub struct Garden {
    length: usize,
    width: usize,
    /// `width` rows of `length` cells; `spots[y][x]` is the bed covering
    /// column `x` of row `y`, if any.
    spots: Matrix<Option<BedId>>,
    beds: Vec<GardenBed>,
    next_bed_id: BedId,
}

impl Garden {
    pub fn new(length: usize, width: usize) -> Self {
        Self {
            length,
            width,
            spots: vec![vec![None; length]; width],
            beds: Vec::new(),
            next_bed_id: 0,
        }
    }

    /// Places a bed with its top-left corner at `(x, y)`, taking ownership of
    /// it and reporting its assigned id. Placement is rejected — and the bed
    /// handed back untouched — on negative coordinates, a full garden, an
    /// out-of-bounds footprint, or any overlap with an already placed bed.
    ///
    /// Bounds and overlap are checked by a direct scan of the footprint
    /// rectangle; at this scale (small grids, at most [`MAX_BEDS`] beds) a
    /// spatial index would be overkill.
    pub fn add_bed(&mut self, bed: GardenBed, x: i64, y: i64) -> Result<BedId, GardenBed> {
        if x < 0 || y < 0 {
            return Err(bed);
        }
        if self.beds.len() >= MAX_BEDS {
            return Err(bed);
        }
        let (x, y) = (x as usize, y as usize);
        if x + bed.length() > self.length || y + bed.width() > self.width {
            return Err(bed);
        }
        for row in &self.spots[y..y + bed.width()] {
            for spot in &row[x..x + bed.length()] {
                if spot.is_some() {
                    return Err(bed);
                }
            }
        }

        let id = self.next_bed_id;
        self.next_bed_id += 1;
        let mut bed = bed;
        bed.assign_id(id);
        for row in &mut self.spots[y..y + bed.width()] {
            for spot in &mut row[x..x + bed.length()] {
                *spot = Some(id);
            }
        }
        self.beds.push(bed);
        Ok(id)
    }

    /// Placed beds in placement (= id) order.
    pub fn beds(&self) -> &[GardenBed] {
        &self.beds
    }

    pub fn bed(&self, id: BedId) -> Option<&GardenBed> {
        self.beds.get(id)
    }

    pub fn bed_mut(&mut self, id: BedId) -> Option<&mut GardenBed> {
        self.beds.get_mut(id)
    }

    /// The occupancy grid, row-major, `width` rows of `length` cells.
    pub fn spots(&self) -> &Matrix<Option<BedId>> {
        &self.spots
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn next_bed_id(&self) -> BedId {
        self.next_bed_id
    }
}

/// Renders the framed occupancy grid, one character per cell: the covering
/// bed's id digit, or a space for an empty cell.
impl fmt::Display for Garden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+{}+", "-".repeat(self.length))?;
        for row in &self.spots {
            write!(f, "|")?;
            for spot in row {
                match spot {
                    Some(id) => write!(f, "{id}")?,
                    None => write!(f, " ")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "+{}+", "-".repeat(self.length))
    }
}
