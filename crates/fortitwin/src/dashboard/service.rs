use serde::Serialize;
use tracing::debug;

use super::dataset::CandidateDataset;
use super::domain::{CandidateId, CandidateView};
use super::export::export_csv;
use super::pipeline::{DashboardView, DashboardViewState, QueryError, ViewStateParts};
use super::stats::{DashboardBreakdown, DashboardStats};

/// Read-only facade over a dataset, shared by the HTTP routes and the CLI.
#[derive(Debug, Clone)]
pub struct CandidateDashboard {
    dataset: CandidateDataset,
    default_page_size: usize,
}

impl CandidateDashboard {
    pub fn new(dataset: CandidateDataset, default_page_size: usize) -> Result<Self, QueryError> {
        if default_page_size == 0 {
            return Err(QueryError::ZeroPageSize);
        }
        Ok(Self {
            dataset,
            default_page_size,
        })
    }

    pub fn dataset(&self) -> &CandidateDataset {
        &self.dataset
    }

    pub fn default_page_size(&self) -> usize {
        self.default_page_size
    }

    /// Parse loosely typed inputs, falling back to the configured page size.
    pub fn view_state(&self, parts: ViewStateParts<'_>) -> Result<DashboardViewState, QueryError> {
        DashboardViewState::from_parts(ViewStateParts {
            default_page_size: self.default_page_size,
            ..parts
        })
    }

    pub fn view(&self, state: &DashboardViewState) -> DashboardView {
        let view = state.apply(&self.dataset);
        debug!(
            matching = view.total_matching,
            page = view.page_index,
            pages = view.total_pages,
            "candidate view built"
        );
        view
    }

    pub fn export(&self, state: &DashboardViewState) -> Result<Vec<u8>, csv::Error> {
        let rows = state.ordered(&self.dataset);
        let mut buffer = Vec::new();
        export_csv(rows, &mut buffer)?;
        debug!(bytes = buffer.len(), "candidate export rendered");
        Ok(buffer)
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            stats: self.dataset.stats(),
            breakdown: self.dataset.breakdown(),
        }
    }

    pub fn candidate(&self, id: CandidateId) -> Option<CandidateView> {
        self.dataset.get(id).map(|record| record.to_view())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub breakdown: DashboardBreakdown,
}
