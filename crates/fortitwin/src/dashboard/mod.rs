pub mod dataset;
pub mod domain;
mod export;
pub mod pipeline;
mod router;
mod service;
pub mod stats;

pub use dataset::{CandidateDataset, DatasetError};
pub use domain::{
    CandidateId, CandidateRecord, CandidateStatus, CandidateView, Department, ParseLabelError,
    Percentage,
};
pub use export::export_csv;
pub use pipeline::{
    DashboardView, DashboardViewState, Facet, FilterCriteria, PageSpec, QueryError, SortDirection,
    SortField, SortSpec, ViewStateParts,
};
pub use router::{dashboard_router, CandidateListQuery};
pub use service::{CandidateDashboard, DashboardSummary};
pub use stats::{DashboardBreakdown, DashboardStats};
