#[macro_use]
pub mod travel_model;
