pub mod bed;
pub mod garden;
pub mod plant;
pub mod request;
pub mod row;

/// Convenience alias for a two-dimensional grid.
pub type Matrix<T> = Vec<Vec<T>>;

/// Index of a placed bed within its garden's bed list, doubling as the bed's
/// public id. Ids are handed out from 0 in placement order and never reused.
pub type BedId = usize;
