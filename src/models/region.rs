//! A region is the continent-level grouping the travel table is split into.
//! The set is fixed and small, so it's an enum rather than a model.

use crate::error::{Error, Result};
use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

/// One of the five continent groupings. Declaration order is table order, and
/// `Ord` follows it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Asia,
    Europe,
    Americas,
    Africa,
    Oceania,
}

impl Region {
    /// Every region, in table order.
    pub fn all() -> &'static [Region] {
        &[
            Region::Asia,
            Region::Europe,
            Region::Americas,
            Region::Africa,
            Region::Oceania,
        ]
    }

    /// The key this region is stored under in the data file.
    pub fn key(&self) -> &'static str {
        match self {
            Region::Asia => "asia",
            Region::Europe => "europe",
            Region::Americas => "americas",
            Region::Africa => "africa",
            Region::Oceania => "oceania",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Americas => "Americas",
            Region::Africa => "Africa",
            Region::Oceania => "Oceania",
        }
    }

    /// The glyph used in the region's section header.
    pub fn emoji(&self) -> &'static str {
        match self {
            Region::Asia => "🌏",
            Region::Europe => "🇪🇺",
            Region::Americas => "🌎",
            Region::Africa => "🌍",
            Region::Oceania => "🌏",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Region {
    type Err = Error;

    /// Accepts either the key or the display name, ignoring case and any
    /// surrounding whitespace.
    fn from_str(val: &str) -> Result<Self> {
        let needle = val.trim();
        Region::all().iter()
            .find(|region| region.key().eq_ignore_ascii_case(needle) || region.name().eq_ignore_ascii_case(needle))
            .copied()
            .ok_or_else(|| Error::UnknownRegion(val.into()))
    }
}
