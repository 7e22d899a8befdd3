//! Reads and writes the travel table as a JSON data file, for when the table
//! lives next to the map instead of inside this crate.
//!
//! The file is an object keyed by region (`asia`, `europe`, ...), each holding
//! an array of `{ "name", "flag", "id"?, "altNames"? }` records. An empty `id`
//! counts as no id. A region key that appears twice is a parse error, so a
//! copy-pasted block can't quietly replace the one above it. Loading doesn't
//! lint; run [validate] on the result if you care.
//!
//! [validate]: ../validate/index.html

use crate::{
    error::Result,
    models::table::TravelTable,
};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::debug;

/// Parse a table from a JSON string.
pub fn from_json_str(json: &str) -> Result<TravelTable> {
    let table: TravelTable = serde_json::from_str(json)?;
    debug!("loaded {} countries from json", table.len());
    Ok(table)
}

/// Parse a table from anything readable.
pub fn from_reader<R: Read>(reader: R) -> Result<TravelTable> {
    let table: TravelTable = serde_json::from_reader(reader)?;
    debug!("loaded {} countries from reader", table.len());
    Ok(table)
}

/// Load a table from a data file on disk.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<TravelTable> {
    let path = path.as_ref();
    debug!("loading travel data from {}", path.display());
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

/// Render a table as pretty-printed JSON.
pub fn to_json_string(table: &TravelTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}

/// Write a table as pretty-printed JSON.
pub fn to_writer<W: Write>(table: &TravelTable, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, table)?;
    Ok(())
}
