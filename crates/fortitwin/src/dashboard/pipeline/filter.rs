use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::super::domain::{CandidateRecord, CandidateStatus, Department};

/// A categorical facet. `All` disables it; a value that failed to parse keeps
/// the facet active but matches no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet<T> {
    All,
    Only(T),
    Unrecognized(String),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Facet<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(expected) => expected == value,
            Facet::Unrecognized(_) => false,
        }
    }
}

impl<T: FromStr> Facet<T> {
    /// Lenient parse used for query strings and CLI flags.
    pub fn parse(raw: &str) -> Self {
        let value = raw.trim();
        if is_all_sentinel(value) {
            return Facet::All;
        }

        match value.parse::<T>() {
            Ok(parsed) => Facet::Only(parsed),
            Err(_) => Facet::Unrecognized(value.to_string()),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Facet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::All => write!(f, "All"),
            Facet::Only(value) => write!(f, "{value}"),
            Facet::Unrecognized(raw) => write!(f, "{raw} (unrecognized)"),
        }
    }
}

fn is_all_sentinel(value: &str) -> bool {
    value.is_empty()
        || ["all", "all departments", "all statuses"]
            .iter()
            .any(|sentinel| value.eq_ignore_ascii_case(sentinel))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub department: Facet<Department>,
    #[serde(default)]
    pub status: Facet<CandidateStatus>,
}

impl FilterCriteria {
    pub fn matches(&self, record: &CandidateRecord) -> bool {
        matches_search(&self.search_query, record)
            && self.department.matches(&record.department)
            && self.status.matches(&record.status)
    }
}

fn matches_search(query: &str, record: &CandidateRecord) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    record.name.to_lowercase().contains(&needle)
        || record.department.label().to_lowercase().contains(&needle)
}

/// Keep the records that satisfy every active criterion, in input order.
pub fn filter_candidates<'a>(
    records: impl IntoIterator<Item = &'a CandidateRecord>,
    criteria: &FilterCriteria,
) -> Vec<&'a CandidateRecord> {
    records
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect()
}
