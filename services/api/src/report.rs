use crate::infra::build_dashboard;
use clap::Args;
use fortitwin::config::AppConfig;
use fortitwin::dashboard::{
    CandidateDashboard, DashboardSummary, DashboardView, DashboardViewState, ViewStateParts,
};
use fortitwin::error::AppError;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DatasetArgs {
    /// CSV export to load instead of the configured or built-in dataset
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QueryArgs {
    /// Case-insensitive text matched against name and department
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Department facet (e.g. "Engineering", "human_resources", "All")
    #[arg(long)]
    pub(crate) department: Option<String>,
    /// Status facet (e.g. "Completed", "in_progress", "All")
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// Sort column: name, department, status, score or date
    #[arg(long)]
    pub(crate) sort: Option<String>,
    /// Sort direction: asc or desc
    #[arg(long)]
    pub(crate) direction: Option<String>,
}

impl QueryArgs {
    fn parts(&self) -> ViewStateParts<'_> {
        ViewStateParts {
            search: self.search.as_deref(),
            department: self.department.as_deref(),
            status: self.status.as_deref(),
            sort: self.sort.as_deref(),
            direction: self.direction.as_deref(),
            ..ViewStateParts::default()
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct CandidateListArgs {
    #[command(flatten)]
    pub(crate) dataset: DatasetArgs,
    #[command(flatten)]
    pub(crate) query: QueryArgs,
    /// 1-based page to show (defaults to 1)
    #[arg(long)]
    pub(crate) page: Option<usize>,
    /// Rows per page (defaults to DASHBOARD_PAGE_SIZE)
    #[arg(long)]
    pub(crate) page_size: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CandidateExportArgs {
    #[command(flatten)]
    pub(crate) dataset: DatasetArgs,
    #[command(flatten)]
    pub(crate) query: QueryArgs,
    /// Write the CSV here instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CandidateStatsArgs {
    #[command(flatten)]
    pub(crate) dataset: DatasetArgs,
}

fn load_dashboard(args: &DatasetArgs) -> Result<CandidateDashboard, AppError> {
    let config = AppConfig::load()?;
    build_dashboard(&config.dashboard, args.dataset.as_deref())
}

pub(crate) fn run_candidate_list(args: CandidateListArgs) -> Result<(), AppError> {
    let dashboard = load_dashboard(&args.dataset)?;
    let state = dashboard.view_state(ViewStateParts {
        page: args.page,
        page_size: args.page_size,
        ..args.query.parts()
    })?;
    let view = dashboard.view(&state);
    print!("{}", render_candidate_list(&state, &view));
    Ok(())
}

pub(crate) fn run_candidate_export(args: CandidateExportArgs) -> Result<(), AppError> {
    let dashboard = load_dashboard(&args.dataset)?;
    let state = dashboard.view_state(args.query.parts())?;
    let csv = dashboard.export(&state)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &csv)?;
            println!("Exported candidates to {}", path.display());
        }
        None => print!("{}", String::from_utf8_lossy(&csv)),
    }
    Ok(())
}

pub(crate) fn run_candidate_stats(args: CandidateStatsArgs) -> Result<(), AppError> {
    let dashboard = load_dashboard(&args.dataset)?;
    print!("{}", render_summary(&dashboard.summary()));
    Ok(())
}

pub(crate) fn render_candidate_list(state: &DashboardViewState, view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Candidates");
    let _ = writeln!(
        out,
        "Filters: search '{}', department {}, status {}",
        state.filter.search_query.trim(),
        state.filter.department,
        state.filter.status
    );
    let _ = writeln!(
        out,
        "Sorted by {} {}",
        state.sort.field, state.sort.direction
    );

    if view.visible_records.is_empty() {
        let _ = writeln!(out, "\nNo candidates on this page");
    } else {
        let _ = writeln!(out);
        for row in &view.visible_records {
            let _ = writeln!(
                out,
                "- #{} {} | {} | {} | score {} | {}",
                row.id, row.name, row.department_label, row.status_label, row.score_label, row.date
            );
        }
    }

    let _ = writeln!(
        out,
        "\nShowing {} to {} of {} (page {} of {})",
        view.showing_from, view.showing_to, view.total_matching, view.page_index, view.total_pages
    );
    let _ = writeln!(
        out,
        "Dataset: {} candidates, {}% completed, average score {}%",
        view.stats.total_candidates, view.stats.completion_rate, view.stats.average_score
    );
    out
}

pub(crate) fn render_summary(summary: &DashboardSummary) -> String {
    let mut out = String::new();
    let stats = &summary.stats;
    let _ = writeln!(out, "Candidate statistics");
    let _ = writeln!(out, "- Total candidates: {}", stats.total_candidates);
    let _ = writeln!(out, "- Completion rate: {}%", stats.completion_rate);
    let _ = writeln!(out, "- Average score: {}%", stats.average_score);

    let _ = writeln!(out, "\nStatus breakdown");
    for entry in &summary.breakdown.status_counts {
        let _ = writeln!(out, "- {}: {}", entry.status_label, entry.count);
    }

    let _ = writeln!(out, "\nScore distribution by department");
    for department in &summary.breakdown.score_distribution {
        let bands = department
            .bands
            .iter()
            .map(|band| format!("{} {}", band.band_label, band.count))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "- {}: {}", department.department_label, bands);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fortitwin::dashboard::CandidateDataset;

    fn dashboard() -> CandidateDashboard {
        CandidateDashboard::new(CandidateDataset::sample(), 5).expect("valid page size")
    }

    #[test]
    fn list_rendering_shows_window_and_stats() {
        let dashboard = dashboard();
        let query = QueryArgs {
            department: Some("Engineering".to_string()),
            sort: Some("score".to_string()),
            direction: Some("desc".to_string()),
            ..QueryArgs::default()
        };
        let state = dashboard.view_state(query.parts()).expect("valid query");
        let output = render_candidate_list(&state, &dashboard.view(&state));

        assert!(output.contains("department Engineering, status All"));
        assert!(output.contains("Sorted by score desc"));
        assert!(output.contains("- #4 Emma Davis | Engineering | Completed | score 92% | 2023-07-20"));
        assert!(output.contains("Showing 1 to 4 of 4 (page 1 of 1)"));
        assert!(output.contains("Dataset: 12 candidates, 42% completed, average score 87%"));
    }

    #[test]
    fn list_rendering_handles_empty_page() {
        let dashboard = dashboard();
        let state = dashboard
            .view_state(ViewStateParts {
                page: Some(7),
                ..ViewStateParts::default()
            })
            .expect("valid query");
        let output = render_candidate_list(&state, &dashboard.view(&state));
        assert!(output.contains("No candidates on this page"));
        assert!(output.contains("Showing 0 to 0 of 12 (page 7 of 3)"));
    }

    #[test]
    fn summary_rendering_lists_breakdowns() {
        let output = render_summary(&dashboard().summary());
        assert!(output.contains("- Completion rate: 42%"));
        assert!(output.contains("- In Progress: 3"));
        assert!(output.contains("- Engineering: 90-100 2, 80-89 2, 70-79 0, 60-69 0, Below 60 0"));
    }

    #[test]
    fn invalid_sort_flag_is_rejected() {
        let query = QueryArgs {
            sort: Some("salary".to_string()),
            ..QueryArgs::default()
        };
        assert!(dashboard().view_state(query.parts()).is_err());
    }
}
