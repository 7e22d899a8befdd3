use travel_data::{
    data,
    error::Result,
    loader,
    validate::{self, LintConfig},
    TravelTable,
};

/// Use the data file given on the command line, or the built-in table if
/// there isn't one. A data file may leave ids out, so we patch in whatever the
/// reference list knows.
fn load() -> Result<TravelTable> {
    match std::env::args().nth(1) {
        Some(path) => {
            let mut table = loader::from_path(path)?;
            let filled = table.fill_missing_ids(data::REFERENCE_IDS);
            if filled > 0 {
                println!("(filled in {} missing id(s) from the reference list)", filled);
            }
            Ok(table)
        }
        None => Ok(data::my_travel_data()),
    }
}

fn example() -> Result<TravelTable> {
    let table = load()?;

    // list everything the same way the map's sidebar does
    for region in table.regions() {
        let countries = table.countries(region);
        println!("{} {} ({})", region.emoji(), region.name().to_uppercase(), countries.len());
        for country in countries {
            let id = country.id().as_ref().map(|x| x.as_str()).unwrap_or("---");
            println!("    {} {} [{}]", country.flag(), country.name(), id);
        }
    }
    println!("{} countries, {} highlighted on the map", table.len(), table.highlight_ids().len());

    let config = LintConfig::builder().require_ids(true).build()?;
    for issue in validate::lint(&table, &config) {
        println!("{}", issue);
    }
    Ok(table)
}

fn main() {
    let table = example().unwrap();
    if let Some((region, country)) = table.find_by_label("Czechia") {
        println!("The map says \"Czechia\", we say {} {} ({}).", country.flag(), country.name(), region);
    }
}
