//! Candidate list pipeline: filter, then sort, then paginate.
//!
//! Every stage borrows from the dataset and returns a new derived view, so
//! running the pipeline twice with the same state yields the same result.

mod filter;
mod paginate;
mod sort;

use serde::{Deserialize, Serialize};

use super::dataset::CandidateDataset;
use super::domain::{CandidateRecord, CandidateStatus, CandidateView, Department, ParseLabelError};
use super::stats::DashboardStats;

pub use filter::{filter_candidates, Facet, FilterCriteria};
pub use paginate::{paginate, total_pages, Page, PageSpec, DEFAULT_PAGE_SIZE};
pub use sort::{sort_candidates, SortDirection, SortField, SortSpec};

/// Everything the presentation layer selects: search box, dropdowns, sorted
/// column and current page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardViewState {
    #[serde(default)]
    pub filter: FilterCriteria,
    #[serde(default)]
    pub sort: SortSpec,
    #[serde(default)]
    pub page: PageSpec,
}

impl DashboardViewState {
    /// Build state from loosely typed inputs (query strings, CLI flags).
    /// Facets are lenient; sort field, direction and page size are not.
    pub fn from_parts(parts: ViewStateParts<'_>) -> Result<Self, QueryError> {
        let filter = FilterCriteria {
            search_query: parts.search.unwrap_or_default().to_string(),
            department: parts
                .department
                .map(Facet::<Department>::parse)
                .unwrap_or_default(),
            status: parts
                .status
                .map(Facet::<CandidateStatus>::parse)
                .unwrap_or_default(),
        };

        let field = parts
            .sort
            .map(str::parse::<SortField>)
            .transpose()?
            .unwrap_or_default();
        let direction = parts
            .direction
            .map(str::parse::<SortDirection>)
            .transpose()?
            .unwrap_or_default();

        let page = PageSpec::new(
            parts.page.unwrap_or(1),
            parts.page_size.unwrap_or(parts.default_page_size),
        )?;

        Ok(Self {
            filter,
            sort: SortSpec::new(field, direction),
            page,
        })
    }

    /// Filtered and sorted rows without pagination, as used by export.
    pub fn ordered<'a>(&self, dataset: &'a CandidateDataset) -> Vec<&'a CandidateRecord> {
        let filtered = filter_candidates(dataset.records(), &self.filter);
        sort_candidates(&filtered, self.sort)
    }

    pub fn apply(&self, dataset: &CandidateDataset) -> DashboardView {
        let ordered = self.ordered(dataset);
        let page = paginate(&ordered, self.page);

        DashboardView {
            showing_from: page.showing_from(),
            showing_to: page.showing_to(),
            page_index: page.page_index,
            page_size: page.page_size,
            total_matching: page.total_items,
            total_pages: page.total_pages,
            visible_records: page.items.iter().map(|record| record.to_view()).collect(),
            stats: dataset.stats(),
        }
    }
}

/// Raw, unvalidated inputs for [`DashboardViewState::from_parts`].
#[derive(Debug, Clone, Copy)]
pub struct ViewStateParts<'a> {
    pub search: Option<&'a str>,
    pub department: Option<&'a str>,
    pub status: Option<&'a str>,
    pub sort: Option<&'a str>,
    pub direction: Option<&'a str>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub default_page_size: usize,
}

impl Default for ViewStateParts<'_> {
    fn default() -> Self {
        Self {
            search: None,
            department: None,
            status: None,
            sort: None,
            direction: None,
            page: None,
            page_size: None,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub visible_records: Vec<CandidateView>,
    pub total_matching: usize,
    pub total_pages: usize,
    pub page_index: usize,
    pub page_size: usize,
    pub showing_from: usize,
    pub showing_to: usize,
    pub stats: DashboardStats,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("page size must be greater than zero")]
    ZeroPageSize,
    #[error(transparent)]
    InvalidParameter(#[from] ParseLabelError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_dashboard_defaults() {
        let state = DashboardViewState::default();
        assert_eq!(state.filter.search_query, "");
        assert_eq!(state.filter.department, Facet::All);
        assert_eq!(state.sort, SortSpec::new(SortField::Name, SortDirection::Asc));
        assert_eq!(state.page.page_index(), 1);
        assert_eq!(state.page.page_size(), 5);
    }

    #[test]
    fn apply_builds_first_page_with_full_stats() {
        let dataset = CandidateDataset::sample();
        let view = DashboardViewState::default().apply(&dataset);

        assert_eq!(view.visible_records.len(), 5);
        assert_eq!(view.total_matching, 12);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.showing_from, 1);
        assert_eq!(view.showing_to, 5);
        assert_eq!(view.visible_records[0].name, "Ava Taylor");
        assert_eq!(view.stats.total_candidates, 12);
    }

    #[test]
    fn stats_ignore_the_active_filter() {
        let dataset = CandidateDataset::sample();
        let state = DashboardViewState::from_parts(ViewStateParts {
            status: Some("Pending"),
            ..ViewStateParts::default()
        })
        .expect("valid parts");
        let view = state.apply(&dataset);

        assert_eq!(view.total_matching, 4);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.stats.total_candidates, 12);
        assert_eq!(view.stats.completion_rate, 42);
    }

    #[test]
    fn from_parts_rejects_bad_sort_and_page_size() {
        let err = DashboardViewState::from_parts(ViewStateParts {
            sort: Some("salary"),
            ..ViewStateParts::default()
        })
        .unwrap_err();
        assert!(matches!(err, QueryError::InvalidParameter(_)));

        let err = DashboardViewState::from_parts(ViewStateParts {
            page_size: Some(0),
            ..ViewStateParts::default()
        })
        .unwrap_err();
        assert_eq!(err, QueryError::ZeroPageSize);
    }

    #[test]
    fn from_parts_uses_configured_default_page_size() {
        let state = DashboardViewState::from_parts(ViewStateParts {
            default_page_size: 10,
            ..ViewStateParts::default()
        })
        .expect("valid parts");
        assert_eq!(state.page.page_size(), 10);
    }

    #[test]
    fn view_state_round_trips_through_json() {
        let state = DashboardViewState::from_parts(ViewStateParts {
            search: Some("li"),
            department: Some("Engineering"),
            sort: Some("score"),
            direction: Some("desc"),
            page: Some(2),
            ..ViewStateParts::default()
        })
        .expect("valid parts");

        let json = serde_json::to_string(&state).expect("serializes");
        let restored: DashboardViewState = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(restored, state);
    }
}
