pub mod api;
pub mod logic;
pub mod models;
