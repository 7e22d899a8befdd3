//! The travel table is edited by hand and nothing stops a bad line from going
//! in. This module is the lint you can run over it afterwards: it never
//! changes the table, it only reports what looks wrong.
//!
//! Issues come in two severities. `Error` means an entry is the wrong shape
//! (a blank name, an id that isn't three digits) and the map will likely
//! misbehave. `Warning` means a convention is broken, such as two entries
//! sharing an id, and the map will cope.

use crate::{
    error::{Error, Result},
    models::{
        country::Country,
        region::Region,
        table::TravelTable,
    },
};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

travel_model! {
    /// Knobs for the lint. The defaults match how the table is meant to be
    /// maintained: ids are optional and empty regions are fine.
    pub struct LintConfig {
        /// Report countries without an id.
        #[builder(default)]
        #[serde(default)]
        require_ids: bool,
        /// Don't report regions with no countries in them.
        #[builder(default = "true")]
        #[serde(default = "default_true")]
        allow_empty_regions: bool,
    }
    LintConfigBuilder
}

fn default_true() -> bool {
    true
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            require_ids: false,
            allow_empty_regions: true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// What's wrong with an entry (or a region).
#[derive(Clone, Debug, PartialEq)]
pub enum IssueKind {
    EmptyName,
    EmptyFlag,
    /// The id isn't exactly three ASCII digits.
    MalformedId(String),
    /// Another country earlier in the table already uses this id.
    DuplicateId {
        id: String,
        first_region: Region,
        first_index: usize,
    },
    /// `alt_names` is present but holds nothing.
    EmptyAltNames,
    /// The alternate name at this position is blank.
    EmptyAltName(usize),
    MissingId,
    EmptyRegion,
}

impl IssueKind {
    pub fn severity(&self) -> Severity {
        match self {
            IssueKind::DuplicateId { .. } | IssueKind::MissingId | IssueKind::EmptyRegion => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::EmptyName => write!(f, "name is empty"),
            IssueKind::EmptyFlag => write!(f, "flag is empty"),
            IssueKind::MalformedId(id) => write!(f, "id {:?} is not three digits", id),
            IssueKind::DuplicateId { id, first_region, first_index } => {
                write!(f, "id {} is already used by {}[{}]", id, first_region.key(), first_index)
            }
            IssueKind::EmptyAltNames => write!(f, "altNames is present but empty"),
            IssueKind::EmptyAltName(idx) => write!(f, "altNames[{}] is empty", idx),
            IssueKind::MissingId => write!(f, "no id, the map can't highlight this country"),
            IssueKind::EmptyRegion => write!(f, "region has no countries"),
        }
    }
}

/// A single lint finding, pointing at a region and (usually) one country in
/// it.
#[derive(Clone, Debug, PartialEq)]
pub struct Issue {
    pub region: Region,
    /// Position of the country within its region, if the issue is about one.
    pub index: Option<usize>,
    /// The country's name as written, for messages.
    pub name: Option<String>,
    pub kind: IssueKind,
}

impl Issue {
    fn country(region: Region, index: usize, country: &Country, kind: IssueKind) -> Self {
        Self {
            region,
            index: Some(index),
            name: Some(country.name().clone()),
            kind,
        }
    }

    fn region(region: Region, kind: IssueKind) -> Self {
        Self {
            region,
            index: None,
            name: None,
            kind,
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity() {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        match (self.index, self.name.as_ref()) {
            (Some(idx), Some(name)) => write!(f, "{}: {}[{}] ({}): {}", level, self.region.key(), idx, name, self.kind),
            (Some(idx), None) => write!(f, "{}: {}[{}]: {}", level, self.region.key(), idx, self.kind),
            _ => write!(f, "{}: {}: {}", level, self.region.key(), self.kind),
        }
    }
}

/// Run every check over the table and return what was found, in table order.
pub fn lint(table: &TravelTable, config: &LintConfig) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut seen_ids: HashMap<&str, (Region, usize)> = HashMap::new();
    for region in table.regions() {
        let countries = table.countries(region);
        if countries.is_empty() && !*config.allow_empty_regions() {
            issues.push(Issue::region(region, IssueKind::EmptyRegion));
        }
        for (idx, country) in countries.iter().enumerate() {
            let mut report = |kind| issues.push(Issue::country(region, idx, country, kind));
            if country.name().trim().is_empty() {
                report(IssueKind::EmptyName);
            }
            if country.flag().trim().is_empty() {
                report(IssueKind::EmptyFlag);
            }
            match country.id() {
                Some(id) => {
                    if !id.is_well_formed() {
                        report(IssueKind::MalformedId(id.as_str().into()));
                    }
                    if !id.as_str().is_empty() {
                        match seen_ids.get(id.as_str()) {
                            Some((first_region, first_index)) => {
                                report(IssueKind::DuplicateId {
                                    id: id.as_str().into(),
                                    first_region: *first_region,
                                    first_index: *first_index,
                                });
                            }
                            None => {
                                seen_ids.insert(id.as_str(), (region, idx));
                            }
                        }
                    }
                }
                None => {
                    if *config.require_ids() {
                        report(IssueKind::MissingId);
                    }
                }
            }
            if let Some(alts) = country.alt_names() {
                if alts.is_empty() {
                    report(IssueKind::EmptyAltNames);
                }
                for (alt_idx, alt) in alts.iter().enumerate() {
                    if alt.trim().is_empty() {
                        report(IssueKind::EmptyAltName(alt_idx));
                    }
                }
            }
        }
    }
    debug!("lint found {} issue(s) in {} countries", issues.len(), table.len());
    issues
}

/// Lint with the default config and fail if anything error-level turns up.
/// Warnings alone are logged and let through.
pub fn check(table: &TravelTable) -> Result<()> {
    let issues = lint(table, &LintConfig::default());
    if issues.iter().any(|x| x.severity() == Severity::Error) {
        return Err(Error::InvalidTable(issues));
    }
    for issue in &issues {
        warn!("{}", issue);
    }
    Ok(())
}
