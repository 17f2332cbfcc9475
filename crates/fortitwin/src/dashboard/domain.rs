use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for candidate records.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CandidateId(pub u32);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    Product,
    HumanResources,
}

impl Department {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Engineering,
            Self::Marketing,
            Self::Sales,
            Self::Product,
            Self::HumanResources,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Marketing => "Marketing",
            Self::Sales => "Sales",
            Self::Product => "Product",
            Self::HumanResources => "Human Resources",
        }
    }

    const fn slug(self) -> &'static str {
        match self {
            Self::Engineering => "engineering",
            Self::Marketing => "marketing",
            Self::Sales => "sales",
            Self::Product => "product",
            Self::HumanResources => "human_resources",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = ParseLabelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|department| {
                department.label().eq_ignore_ascii_case(value)
                    || department.slug().eq_ignore_ascii_case(value)
            })
            .ok_or_else(|| ParseLabelError::new("department", value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    Completed,
    InProgress,
    Pending,
}

impl CandidateStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Completed, Self::InProgress, Self::Pending]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Pending => "Pending",
        }
    }

    const fn slug(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in_progress",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CandidateStatus {
    type Err = ParseLabelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|status| {
                status.label().eq_ignore_ascii_case(value)
                    || status.slug().eq_ignore_ascii_case(value)
            })
            .ok_or_else(|| ParseLabelError::new("status", value))
    }
}

/// Assessment score as a whole percentage, always within `0..=100`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self, ParseLabelError> {
        if value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(ParseLabelError::new("score", value.to_string()))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ParseLabelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(value: Percentage) -> Self {
        value.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Parse the dashboard's score column: `88`, `88%`, or `-`/empty for unscored.
pub fn parse_score(raw: &str) -> Result<Option<Percentage>, ParseLabelError> {
    let value = raw.trim();
    if value.is_empty() || value == "-" {
        return Ok(None);
    }

    let digits = value.strip_suffix('%').unwrap_or(value).trim();
    let number = digits
        .parse::<u8>()
        .map_err(|_| ParseLabelError::new("score", value))?;
    Percentage::new(number).map(Some)
}

/// Render a score the way the dashboard table shows it.
pub fn format_score(score: Option<Percentage>) -> String {
    match score {
        Some(score) => score.to_string(),
        None => "-".to_string(),
    }
}

/// A single candidate row shown on the HR dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: CandidateId,
    pub name: String,
    pub department: Department,
    pub status: CandidateStatus,
    pub score: Option<Percentage>,
    pub date: NaiveDate,
}

impl CandidateRecord {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        department: Department,
        status: CandidateStatus,
        score: Option<Percentage>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: CandidateId(id),
            name: name.into(),
            department,
            status,
            score,
            date,
        }
    }

    pub fn to_view(&self) -> CandidateView {
        CandidateView {
            id: self.id,
            name: self.name.clone(),
            department: self.department,
            department_label: self.department.label(),
            status: self.status,
            status_label: self.status.label(),
            score: self.score.map(Percentage::value),
            score_label: format_score(self.score),
            date: self.date,
        }
    }
}

/// Serialized row with display labels alongside the typed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateView {
    pub id: CandidateId,
    pub name: String,
    pub department: Department,
    pub department_label: &'static str,
    pub status: CandidateStatus,
    pub status_label: &'static str,
    pub score: Option<u8>,
    pub score_label: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {kind} '{value}'")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseLabelError {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
