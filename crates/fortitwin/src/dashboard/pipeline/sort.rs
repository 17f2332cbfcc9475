use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::super::domain::{CandidateRecord, ParseLabelError};

/// Columns the candidate table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Name,
    Department,
    Status,
    Score,
    Date,
}

impl SortField {
    pub const fn all() -> [Self; 5] {
        [
            Self::Name,
            Self::Department,
            Self::Status,
            Self::Score,
            Self::Date,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Department => "department",
            Self::Status => "status",
            Self::Score => "score",
            Self::Date => "date",
        }
    }

    /// Ascending comparison for this column. Unscored records are not handled
    /// here; see [`sort_candidates`].
    fn compare(self, a: &CandidateRecord, b: &CandidateRecord) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Department => a.department.label().cmp(b.department.label()),
            Self::Status => a.status.label().cmp(b.status.label()),
            Self::Score => a.score.cmp(&b.score),
            Self::Date => a.date.cmp(&b.date),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortField {
    type Err = ParseLabelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        Self::all()
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(value))
            .ok_or_else(|| ParseLabelError::new("sort field", value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseLabelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            other => Err(ParseLabelError::new("sort direction", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Column-header click: the active column flips direction, any other
    /// column becomes active in ascending order.
    pub fn toggled(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::new(field, SortDirection::Asc)
        }
    }

    pub fn compare(&self, a: &CandidateRecord, b: &CandidateRecord) -> Ordering {
        if self.field == SortField::Score {
            // unscored rows trail in both directions
            return match (a.score, b.score) {
                (Some(_), Some(_)) => self.direction.apply(self.field.compare(a, b)),
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
            };
        }

        self.direction.apply(self.field.compare(a, b))
    }
}

/// Stable sort into a new vector; equal rows keep their input order.
pub fn sort_candidates<'a>(
    records: &[&'a CandidateRecord],
    spec: SortSpec,
) -> Vec<&'a CandidateRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| spec.compare(a, b));
    sorted
}
