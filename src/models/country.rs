//! A country is one line of the travel table: the name we show, the flag we
//! show next to it, the ISO 3166-1 numeric id the map highlights by, and any
//! other names the map's labels might use for the same place.

use serde::{Serialize, Deserialize, Deserializer};
use std::fmt;

/// The ISO 3166-1 numeric identifier of a country, kept as the three-digit
/// string it's written as (`"040"`, not `40`).
///
/// Building one never fails; whether it's actually well-formed is the
/// linter's business.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryID(String);

impl CountryID {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self(id.into())
    }

    /// Return a string ref for this ID
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether this is exactly three ASCII digits.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == 3 && self.0.bytes().all(|b| b.is_ascii_digit())
    }

    /// The numeric value of a well-formed id, so `"040"` gives `40`.
    pub fn numeric(&self) -> Option<u16> {
        if !self.is_well_formed() {
            return None;
        }
        self.0.parse().ok()
    }
}

impl From<CountryID> for String {
    fn from(id: CountryID) -> Self {
        let CountryID(val) = id;
        val
    }
}

impl From<String> for CountryID {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CountryID {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for CountryID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data files write "no id" as an empty string.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<CountryID>, D::Error>
    where D: Deserializer<'de>,
{
    let val: Option<String> = Option::deserialize(deserializer)?;
    Ok(val.filter(|id| !id.is_empty()).map(CountryID::from))
}

/// Compare two labels the way external map labels need comparing: trimmed and
/// case-insensitive.
pub(crate) fn same_label(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

travel_model! {
    /// A visited country.
    #[serde(rename_all = "camelCase")]
    pub struct Country {
        /// The display name. Not necessarily unique across regions.
        name: String,
        /// The emoji flag shown beside the name.
        flag: String,
        /// ISO 3166-1 numeric id. Countries without one still show up in the
        /// list, they just don't get highlighted on the map.
        #[builder(setter(into, strip_option), default)]
        #[serde(default, deserialize_with = "deserialize_id", skip_serializing_if = "Option::is_none")]
        id: Option<CountryID>,
        /// Other names the map might label this country with (ie "Czechia").
        #[builder(setter(into, strip_option), default)]
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt_names: Option<Vec<String>>,
    }
    CountryBuilder
}

impl Country {
    /// Create a country directly, for when every field is already at hand.
    pub fn new<T, F>(name: T, flag: F, id: Option<CountryID>, alt_names: Option<Vec<String>>) -> Self
        where T: Into<String>,
              F: Into<String>,
    {
        Self {
            name: name.into(),
            flag: flag.into(),
            id,
            alt_names,
        }
    }

    /// The name followed by each alternate name.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.alt_names.iter().flatten().map(|x| x.as_str()))
    }

    /// Determines if an external label refers to this country, by name or by
    /// any of the alternate names.
    pub fn matches_label(&self, label: &str) -> bool {
        self.labels().any(|ours| same_label(ours, label))
    }

    /// Check whether this country carries the given id.
    pub fn has_id(&self, id: &str) -> bool {
        match self.id.as_ref() {
            Some(ours) => ours.as_str() == id,
            None => false,
        }
    }
}
