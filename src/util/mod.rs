//! A set of utility structs and functions used when working with the table.
