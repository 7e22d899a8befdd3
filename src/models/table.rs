//! The travel table maps each region to the countries visited there. It's the
//! one thing the map consumes: it highlights `highlight_ids()` and resolves
//! its own labels through `find_by_label()`.
//!
//! Nothing here validates entries. A table with duplicate ids or blank names
//! is still a table; see the [validate] module for finding those.
//!
//! [validate]: ../../validate/index.html

use crate::{
    data::ReferenceId,
    models::{
        country::{Country, CountryID},
        region::Region,
    },
};
use serde::{
    de::{self, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::debug;

/// An ordered mapping from region to the countries in it. Regions iterate in
/// `Region` order, countries in the order they were added.
///
/// Deserializing refuses a region key that shows up twice rather than letting
/// the later list replace the earlier one.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TravelTable {
    regions: BTreeMap<Region, Vec<Country>>,
}

impl TravelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure a region shows up in the table, even with nothing in it.
    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.entry(region).or_insert_with(Vec::new);
        self
    }

    /// Add a country to the end of a region's list.
    pub fn push(&mut self, region: Region, country: Country) {
        self.regions.entry(region).or_insert_with(Vec::new).push(country);
    }

    /// Remove the first country (in table order) whose name is exactly `name`.
    /// The region stays in the table even if this empties it.
    pub fn remove_by_name(&mut self, name: &str) -> Option<(Region, Country)> {
        for (region, countries) in self.regions.iter_mut() {
            if let Some(idx) = countries.iter().position(|c| c.name() == name) {
                return Some((*region, countries.remove(idx)));
            }
        }
        None
    }

    /// The regions present in this table, in order.
    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        self.regions.keys().copied()
    }

    /// The countries in a region. Regions not in the table are empty.
    pub fn countries(&self, region: Region) -> &[Country] {
        self.regions.get(&region)
            .map(|x| x.as_slice())
            .unwrap_or(&[])
    }

    /// Every country in the table along with the region it's listed under.
    pub fn iter(&self) -> impl Iterator<Item = (Region, &Country)> {
        self.regions.iter()
            .flat_map(|(region, countries)| countries.iter().map(move |c| (*region, c)))
    }

    /// The number of countries across all regions.
    pub fn len(&self) -> usize {
        self.regions.values().map(|x| x.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find the first country carrying the given id.
    pub fn find_by_id(&self, id: &str) -> Option<(Region, &Country)> {
        self.iter().find(|(_, country)| country.has_id(id))
    }

    /// Resolve an external label (ie a map's country name) to one of our
    /// countries, by name or alternate name.
    pub fn find_by_label(&self, label: &str) -> Option<(Region, &Country)> {
        self.iter().find(|(_, country)| country.matches_label(label))
    }

    /// The ids the map should highlight. Countries with no id (or a blank one)
    /// are skipped.
    pub fn highlight_ids(&self) -> BTreeSet<&str> {
        self.iter()
            .filter_map(|(_, country)| country.id().as_ref())
            .map(|id| id.as_str())
            .filter(|id| !id.is_empty())
            .collect()
    }

    /// How many countries each present region holds.
    pub fn summary(&self) -> Vec<(Region, usize)> {
        self.regions.iter()
            .map(|(region, countries)| (*region, countries.len()))
            .collect()
    }

    /// Give an id to every country that doesn't have one but whose name (or
    /// one of its alternate names) is in the reference list. Returns how many
    /// ids were filled in.
    pub fn fill_missing_ids(&mut self, reference: &[ReferenceId]) -> usize {
        let mut filled = 0;
        for country in self.regions.values_mut().flatten() {
            if country.id().is_some() {
                continue;
            }
            let found = reference.iter()
                .find(|entry| country.matches_label(entry.name));
            if let Some(entry) = found {
                debug!("filling id {} for {}", entry.id, country.name());
                country.set_id(Some(CountryID::new(entry.id)));
                filled += 1;
            }
        }
        filled
    }
}

struct TravelTableVisitor;

impl<'de> Visitor<'de> for TravelTableVisitor {
    type Value = TravelTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of region keys to lists of countries")
    }

    fn visit_map<A>(self, mut access: A) -> Result<TravelTable, A::Error>
        where A: MapAccess<'de>,
    {
        let mut regions = BTreeMap::new();
        while let Some(region) = access.next_key::<Region>()? {
            if regions.contains_key(&region) {
                return Err(de::Error::custom(format!("region `{}` is listed more than once", region.key())));
            }
            let countries: Vec<Country> = access.next_value()?;
            regions.insert(region, countries);
        }
        Ok(TravelTable { regions })
    }
}

impl<'de> Deserialize<'de> for TravelTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>,
    {
        deserializer.deserialize_map(TravelTableVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::{self, REFERENCE_IDS},
        util::test::{make_country, make_country_with_alts, make_table},
    };

    #[test]
    fn push_and_order() {
        let mut table = TravelTable::new();
        assert!(table.is_empty());
        table.push(Region::Oceania, make_country("Australia", "🇦🇺", Some("036")));
        table.push(Region::Asia, make_country("China", "🇨🇳", Some("156")));
        table.push(Region::Asia, make_country("Japan", "🇯🇵", Some("392")));
        assert_eq!(table.len(), 3);
        assert_eq!(table.regions().collect::<Vec<_>>(), vec![Region::Asia, Region::Oceania]);
        let names = table.iter().map(|(_, c)| c.name().as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["China", "Japan", "Australia"]);
        assert_eq!(table.countries(Region::Asia).len(), 2);
        assert!(table.countries(Region::Africa).is_empty());
    }

    #[test]
    fn empty_regions() {
        let table = TravelTable::new().with_region(Region::Africa);
        assert!(table.is_empty());
        assert_eq!(table.regions().collect::<Vec<_>>(), vec![Region::Africa]);
        assert_eq!(table.summary(), vec![(Region::Africa, 0)]);
    }

    #[test]
    fn removes() {
        let mut table = make_table();
        let len = table.len();
        let (region, country) = table.remove_by_name("Canada").unwrap();
        assert_eq!(region, Region::Americas);
        assert_eq!(country.name(), "Canada");
        assert_eq!(table.len(), len - 1);
        assert!(table.remove_by_name("Canada").is_none());
        assert!(table.remove_by_name("canada").is_none());

        let (region, _) = table.remove_by_name("Morocco").unwrap();
        assert_eq!(region, Region::Africa);
        assert!(table.countries(Region::Africa).is_empty());
        assert!(table.regions().any(|r| r == Region::Africa));
    }

    #[test]
    fn finds() {
        let table = make_table();
        let (region, country) = table.find_by_id("203").unwrap();
        assert_eq!(region, Region::Europe);
        assert_eq!(country.name(), "Czech Republic");
        assert!(table.find_by_id("999").is_none());

        let (region, country) = table.find_by_label("Czechia").unwrap();
        assert_eq!(region, Region::Europe);
        assert_eq!(country.id(), &Some(CountryID::new("203")));
        let (_, country) = table.find_by_label("united states of america").unwrap();
        assert_eq!(country.name(), "United States");
        assert!(table.find_by_label("Atlantis").is_none());
    }

    #[test]
    fn first_match_wins() {
        let mut table = TravelTable::new();
        table.push(Region::Europe, make_country("Georgia", "🇬🇪", Some("268")));
        table.push(Region::Asia, make_country("Georgia", "🇬🇪", Some("268")));
        let (region, _) = table.find_by_label("Georgia").unwrap();
        assert_eq!(region, Region::Asia);
        let (region, _) = table.find_by_id("268").unwrap();
        assert_eq!(region, Region::Asia);
    }

    #[test]
    fn highlights() {
        let mut table = TravelTable::new();
        table.push(Region::Asia, make_country("China", "🇨🇳", Some("156")));
        table.push(Region::Asia, make_country("Thailand", "🇹🇭", None));
        table.push(Region::Europe, make_country("Nowhere", "🏳️", Some("")));
        table.push(Region::Europe, make_country("Austria", "🇦🇹", Some("040")));
        table.push(Region::Europe, make_country("Austria again", "🇦🇹", Some("040")));
        let ids = table.highlight_ids().into_iter().collect::<Vec<_>>();
        assert_eq!(ids, vec!["040", "156"]);
    }

    #[test]
    fn summarizes() {
        let table = data::my_travel_data();
        assert_eq!(table.summary(), vec![
            (Region::Asia, 5),
            (Region::Europe, 12),
            (Region::Americas, 3),
            (Region::Africa, 1),
            (Region::Oceania, 1),
        ]);
    }

    #[test]
    fn fills_missing_ids() {
        let mut table = TravelTable::new();
        table.push(Region::Asia, make_country("Thailand", "🇹🇭", None));
        table.push(Region::Asia, make_country("south korea", "🇰🇷", None));
        table.push(Region::Europe, make_country_with_alts("Czechia", "🇨🇿", None, vec!["Czech Republic"]));
        table.push(Region::Europe, make_country("Greece", "🇬🇷", Some("999")));
        table.push(Region::Europe, make_country("Atlantis", "🏳️", None));
        let filled = table.fill_missing_ids(REFERENCE_IDS);
        assert_eq!(filled, 3);
        assert!(table.find_by_label("Thailand").unwrap().1.has_id("764"));
        assert!(table.find_by_label("South Korea").unwrap().1.has_id("410"));
        assert!(table.find_by_label("Czechia").unwrap().1.has_id("203"));
        assert!(table.find_by_label("Greece").unwrap().1.has_id("999"));
        assert_eq!(table.find_by_label("Atlantis").unwrap().1.id(), &None);
        assert_eq!(table.fill_missing_ids(REFERENCE_IDS), 0);
    }
}
