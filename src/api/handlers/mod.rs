pub mod beds;
pub mod garden;
pub mod plants;
