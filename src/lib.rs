//! Welcome to the travel data library. This crate holds the hand-maintained
//! list of countries I've been to, grouped by continent, that the travel map
//! on the site highlights.
//!
//! The table itself lives in [data](data/index.html), and editing it is a
//! matter of copying or deleting a line. Everything else here is for the code
//! reading the table: typed [models](models/index.html), label and id lookups
//! so the map can resolve its own country names (ie "Czechia" finds the
//! "Czech Republic" entry), an optional [lint](validate/index.html), and a
//! [JSON form](loader/index.html) of the same table.
//!
//! ```
//! use travel_data::{data, Region};
//!
//! let table = data::my_travel_data();
//! let (region, country) = table.find_by_label("Czechia").unwrap();
//! assert_eq!(region, Region::Europe);
//! assert_eq!(country.name(), "Czech Republic");
//! assert!(table.highlight_ids().contains("203"));
//! ```

pub mod error;
mod util;
#[macro_use]
pub mod models;
pub mod data;
pub mod loader;
pub mod validate;

pub use models::{
    country::{Country, CountryBuilder, CountryID},
    region::Region,
    table::TravelTable,
};
