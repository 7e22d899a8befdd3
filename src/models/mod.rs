//! The data model of the travel table: regions, the countries in them, and the
//! table that maps one to the other.

#[macro_use]
mod lib;

pub mod region;
pub mod country;
pub mod table;
