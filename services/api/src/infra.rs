use fortitwin::config::DashboardConfig;
use fortitwin::dashboard::{CandidateDashboard, CandidateDataset};
use fortitwin::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the CSV at `path`, or fall back to the built-in sample candidates.
pub(crate) fn load_dataset(path: Option<&Path>) -> Result<CandidateDataset, AppError> {
    match path {
        Some(path) => {
            let dataset = CandidateDataset::from_path(path)?;
            info!(path = %path.display(), candidates = dataset.len(), "candidate dataset imported");
            Ok(dataset)
        }
        None => Ok(CandidateDataset::sample()),
    }
}

/// Build the dashboard from configuration; an explicit path overrides the
/// configured CSV.
pub(crate) fn build_dashboard(
    config: &DashboardConfig,
    dataset_override: Option<&Path>,
) -> Result<CandidateDashboard, AppError> {
    let path = dataset_override.or(config.dataset_csv.as_deref());
    let dataset = load_dataset(path)?;
    Ok(CandidateDashboard::new(dataset, config.page_size)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_csv(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("fortitwin-{}-{name}.csv", std::process::id()));
        let mut file = std::fs::File::create(&path).expect("temp file");
        file.write_all(body.as_bytes()).expect("write csv");
        path
    }

    #[test]
    fn falls_back_to_sample_dataset() {
        let config = DashboardConfig {
            dataset_csv: None,
            page_size: 5,
        };
        let dashboard = build_dashboard(&config, None).expect("sample loads");
        assert_eq!(dashboard.dataset().len(), 12);
        assert_eq!(dashboard.default_page_size(), 5);
    }

    #[test]
    fn override_path_wins_over_config() {
        let path = write_csv(
            "override",
            "id,name,department,status,score,date\n1,Ada,Engineering,Completed,91%,2023-07-01\n",
        );
        let config = DashboardConfig {
            dataset_csv: Some(PathBuf::from("/definitely/missing.csv")),
            page_size: 5,
        };
        let dashboard = build_dashboard(&config, Some(&path)).expect("override loads");
        assert_eq!(dashboard.dataset().len(), 1);
        assert_eq!(dashboard.summary().stats.average_score, 91);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_configured_file_is_an_error() {
        let config = DashboardConfig {
            dataset_csv: Some(PathBuf::from("/definitely/missing.csv")),
            page_size: 5,
        };
        let err = build_dashboard(&config, None).unwrap_err();
        assert!(matches!(err, AppError::Dataset(_)));
    }
}
