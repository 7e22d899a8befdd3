//! My travel data: the hand-maintained table the map is drawn from.
//!
//! To add a country, copy an existing `country!` line and change it. To remove
//! one, delete its line. Flags come from https://emojipedia.org/flags/ and ids
//! from https://en.wikipedia.org/wiki/ISO_3166-1_numeric. The id can be left
//! out entirely; the country still shows in the list, the map just can't
//! highlight it (but see `REFERENCE_IDS` and `TravelTable::fill_missing_ids`).

use crate::models::{
    country::{Country, CountryID},
    region::Region,
    table::TravelTable,
};

macro_rules! country {
    ($table:ident, $region:ident, $name:literal, $flag:literal, $id:literal, alt: [$($alt:literal),+]) => {
        $table.push(Region::$region, Country::new($name, $flag, Some(CountryID::new($id)), Some(vec![$($alt.to_owned()),+])));
    };
    ($table:ident, $region:ident, $name:literal, $flag:literal, $id:literal) => {
        $table.push(Region::$region, Country::new($name, $flag, Some(CountryID::new($id)), None));
    };
    ($table:ident, $region:ident, $name:literal, $flag:literal) => {
        $table.push(Region::$region, Country::new($name, $flag, None, None));
    };
}

/// Build the travel table.
pub fn my_travel_data() -> TravelTable {
    let mut t = TravelTable::new();

    // 🌏 ASIA
    country!(t, Asia, "China", "🇨🇳", "156");
    country!(t, Asia, "Japan", "🇯🇵", "392");
    country!(t, Asia, "Cambodia", "🇰🇭", "116");
    country!(t, Asia, "Philippines", "🇵🇭", "608");
    country!(t, Asia, "Turkey", "🇹🇷", "792");

    // 🇪🇺 EUROPE
    country!(t, Europe, "United Kingdom", "🇬🇧", "826");
    country!(t, Europe, "Germany", "🇩🇪", "276");
    country!(t, Europe, "France", "🇫🇷", "250");
    country!(t, Europe, "Spain", "🇪🇸", "724");
    country!(t, Europe, "Italy", "🇮🇹", "380");
    country!(t, Europe, "Portugal", "🇵🇹", "620");
    country!(t, Europe, "Hungary", "🇭🇺", "348");
    country!(t, Europe, "Austria", "🇦🇹", "040");
    country!(t, Europe, "Czech Republic", "🇨🇿", "203", alt: ["Czechia"]);
    country!(t, Europe, "Vatican City", "🇻🇦", "336");
    country!(t, Europe, "Monaco", "🇲🇨", "492");
    country!(t, Europe, "Iceland", "🇮🇸", "352");

    // 🌎 AMERICAS
    country!(t, Americas, "United States", "🇺🇸", "840", alt: ["United States of America"]);
    country!(t, Americas, "Canada", "🇨🇦", "124");
    country!(t, Americas, "Mexico", "🇲🇽", "484");

    // 🌍 AFRICA
    country!(t, Africa, "Morocco", "🇲🇦", "504");

    // 🌏 OCEANIA
    country!(t, Oceania, "Australia", "🇦🇺", "036");

    t
}

/// A known name -> id pairing, used to fill in ids that were left out.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceId {
    pub name: &'static str,
    pub id: &'static str,
    pub region: Region,
}

macro_rules! reference {
    ($($region:ident: [$($name:literal => $id:literal),* $(,)?]),* $(,)?) => {
        &[
            $($(
                ReferenceId { name: $name, id: $id, region: Region::$region },
            )*)*
        ]
    };
}

/// Common country ids: places not (yet) in the table, followed by every
/// country that is.
pub static REFERENCE_IDS: &[ReferenceId] = reference! {
    Asia: [
        "Thailand" => "764", "Singapore" => "702", "South Korea" => "410",
        "India" => "356", "Vietnam" => "704", "Malaysia" => "458",
        "Indonesia" => "360",
    ],
    Europe: [
        "Netherlands" => "528", "Belgium" => "056", "Switzerland" => "756",
        "Sweden" => "752", "Norway" => "578", "Denmark" => "208",
        "Poland" => "616", "Greece" => "300",
    ],
    Americas: [
        "Brazil" => "076", "Argentina" => "032", "Chile" => "152",
        "Peru" => "604", "Colombia" => "170", "Costa Rica" => "188",
    ],
    Africa: [
        "Egypt" => "818", "South Africa" => "710", "Kenya" => "404",
        "Tanzania" => "834",
    ],
    Oceania: [
        "New Zealand" => "554", "Fiji" => "242",
    ],

    Asia: [
        "China" => "156", "Japan" => "392", "Cambodia" => "116",
        "Philippines" => "608", "Turkey" => "792",
    ],
    Europe: [
        "United Kingdom" => "826", "Germany" => "276", "France" => "250",
        "Spain" => "724", "Italy" => "380", "Portugal" => "620",
        "Hungary" => "348", "Austria" => "040", "Czech Republic" => "203",
        "Czechia" => "203", "Vatican City" => "336", "Monaco" => "492",
        "Iceland" => "352",
    ],
    Americas: [
        "United States" => "840", "United States of America" => "840",
        "Canada" => "124", "Mexico" => "484",
    ],
    Africa: [
        "Morocco" => "504",
    ],
    Oceania: [
        "Australia" => "036",
    ],
};

/// Look a country up in the reference list by name, ignoring case.
pub fn reference_id(name: &str) -> Option<&'static ReferenceId> {
    REFERENCE_IDS.iter()
        .find(|entry| crate::models::country::same_label(entry.name, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{self, LintConfig};
    use std::collections::HashSet;

    #[test]
    fn table_contents() {
        let table = my_travel_data();
        assert_eq!(table.len(), 22);
        assert_eq!(table.regions().collect::<Vec<_>>(), Region::all().to_vec());

        let asia = table.countries(Region::Asia).iter().map(|c| c.name().as_str()).collect::<Vec<_>>();
        assert_eq!(asia, vec!["China", "Japan", "Cambodia", "Philippines", "Turkey"]);
        let africa = &table.countries(Region::Africa)[0];
        assert_eq!(africa.name(), "Morocco");
        assert_eq!(africa.flag(), "🇲🇦");
        assert!(africa.has_id("504"));
        let oceania = &table.countries(Region::Oceania)[0];
        assert!(oceania.has_id("036"));
    }

    #[test]
    fn czechia_resolves() {
        let table = my_travel_data();
        let (region, country) = table.find_by_label("Czechia").unwrap();
        assert_eq!(region, Region::Europe);
        assert_eq!(country.name(), "Czech Republic");
        assert_eq!(country.flag(), "🇨🇿");
        assert_eq!(country.id(), &Some(CountryID::new("203")));
        assert_eq!(country.alt_names(), &Some(vec!["Czechia".to_string()]));
    }

    #[test]
    fn table_is_clean() {
        let table = my_travel_data();
        assert_eq!(validate::check(&table), Ok(()));
        let strict = LintConfig::builder()
            .require_ids(true)
            .allow_empty_regions(false)
            .build().unwrap();
        assert_eq!(validate::lint(&table, &strict), vec![]);
        assert_eq!(table.highlight_ids().len(), table.len());
    }

    #[test]
    fn reference_is_consistent() {
        for entry in REFERENCE_IDS {
            assert!(CountryID::new(entry.id).is_well_formed(), "{:?}", entry);
        }
        // every id in the table is in the reference, under the same region
        let table = my_travel_data();
        for (region, country) in table.iter() {
            let entry = reference_id(country.name()).unwrap();
            assert!(country.has_id(entry.id));
            assert_eq!(entry.region, region);
        }
        // no name is listed twice
        let mut names = HashSet::new();
        for entry in REFERENCE_IDS {
            assert!(names.insert(entry.name.to_lowercase()), "duplicate name {}", entry.name);
        }
    }

    #[test]
    fn reference_lookup() {
        assert_eq!(reference_id("thailand").map(|x| x.id), Some("764"));
        assert_eq!(reference_id("Belgium").map(|x| x.id), Some("056"));
        assert_eq!(reference_id("Fiji").map(|x| x.region), Some(Region::Oceania));
        assert_eq!(reference_id("Atlantis"), None);
    }
}
