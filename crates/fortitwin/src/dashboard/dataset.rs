use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use super::domain::{
    parse_score, CandidateId, CandidateRecord, CandidateStatus, Department, ParseLabelError,
    Percentage,
};
use super::stats::{DashboardBreakdown, DashboardStats};

/// Immutable, ordered candidate dataset plus the aggregates derived from it.
///
/// Cloning is cheap; the records are shared. Aggregates are computed once at
/// construction since the records can never change afterwards.
#[derive(Debug, Clone)]
pub struct CandidateDataset {
    records: Arc<[CandidateRecord]>,
    stats: DashboardStats,
}

impl CandidateDataset {
    pub fn from_records(records: Vec<CandidateRecord>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(DatasetError::DuplicateId(record.id));
            }
        }

        let stats = DashboardStats::compute(&records);
        Ok(Self {
            records: records.into(),
            stats,
        })
    }

    /// The twelve demo candidates shown on the HR dashboard.
    pub fn sample() -> Self {
        let records = sample_records();
        let stats = DashboardStats::compute(&records);
        Self {
            records: records.into(),
            stats,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = Self::from_reader(file)?;
        debug!(path = %path.display(), records = dataset.len(), "candidate dataset loaded");
        Ok(dataset)
    }

    /// Import a CSV export with the columns `id,name,department,status,score,date`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for (index, row) in csv_reader.deserialize::<CandidateRow>().enumerate() {
            // header is line 1
            let line = index + 2;
            let row = row?;
            records.push(row.into_record(line)?);
        }

        Self::from_records(records)
    }

    pub fn records(&self) -> &[CandidateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: CandidateId) -> Option<&CandidateRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn stats(&self) -> DashboardStats {
        self.stats
    }

    pub fn breakdown(&self) -> DashboardBreakdown {
        DashboardBreakdown::compute(&self.records)
    }
}

impl Default for CandidateDataset {
    fn default() -> Self {
        Self::sample()
    }
}

#[derive(Debug, Deserialize)]
struct CandidateRow {
    id: u32,
    name: String,
    department: String,
    status: String,
    #[serde(default)]
    score: String,
    date: String,
}

impl CandidateRow {
    fn into_record(self, line: usize) -> Result<CandidateRecord, DatasetError> {
        let invalid = |source: ParseLabelError| DatasetError::InvalidRow { line, source };

        let department = self.department.parse::<Department>().map_err(invalid)?;
        let status = self.status.parse::<CandidateStatus>().map_err(invalid)?;
        let score = parse_score(&self.score).map_err(invalid)?;
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| invalid(ParseLabelError::new("date", self.date.clone())))?;

        Ok(CandidateRecord {
            id: CandidateId(self.id),
            name: self.name,
            department,
            status,
            score,
            date,
        })
    }
}

fn sample_records() -> Vec<CandidateRecord> {
    use CandidateStatus::{Completed, InProgress, Pending};
    use Department::{Engineering, HumanResources, Marketing, Product, Sales};

    let rows: [(u32, &str, Department, CandidateStatus, Option<u8>, (i32, u32, u32)); 12] = [
        (1, "Liam Johnson", Engineering, Completed, Some(88), (2023, 7, 15)),
        (2, "Olivia Smith", Marketing, Pending, None, (2023, 8, 1)),
        (3, "Noah Williams", Sales, InProgress, None, (2023, 8, 5)),
        (4, "Emma Davis", Engineering, Completed, Some(92), (2023, 7, 20)),
        (5, "James Brown", Product, InProgress, None, (2023, 7, 22)),
        (6, "Sophia Wilson", HumanResources, Pending, None, (2023, 8, 10)),
        (7, "Lucas Garcia", Engineering, Completed, Some(85), (2023, 7, 18)),
        (8, "Mia Martinez", Marketing, Pending, None, (2023, 7, 25)),
        (9, "Ethan Anderson", Sales, InProgress, None, (2023, 8, 8)),
        (10, "Ava Taylor", Product, Pending, None, (2023, 8, 15)),
        (11, "Benjamin Moore", Engineering, Completed, Some(90), (2023, 7, 19)),
        (12, "Isabella White", HumanResources, Completed, Some(82), (2023, 7, 23)),
    ];

    rows.into_iter()
        .filter_map(|(id, name, department, status, score, (year, month, day))| {
            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            let score = match score {
                Some(value) => Some(Percentage::new(value).ok()?),
                None => None,
            };
            Some(CandidateRecord::new(id, name, department, status, score, date))
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("duplicate candidate id {0}")]
    DuplicateId(CandidateId),
    #[error("row {line}: {source}")]
    InvalidRow {
        line: usize,
        #[source]
        source: ParseLabelError,
    },
    #[error("failed to parse candidate csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to read candidate csv: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn sample_contains_twelve_unique_records() {
        let dataset = CandidateDataset::sample();
        assert_eq!(dataset.len(), 12);
        let ids: HashSet<_> = dataset.records().iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 12);
        assert_eq!(dataset.records()[0].name, "Liam Johnson");
        assert_eq!(dataset.records()[11].name, "Isabella White");
    }

    #[test]
    fn sample_stats_are_precomputed() {
        let stats = CandidateDataset::sample().stats();
        assert_eq!(stats.total_candidates, 12);
        assert_eq!(stats.completion_rate, 42);
        assert_eq!(stats.average_score, 87);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut records = CandidateDataset::sample().records().to_vec();
        records.push(records[0].clone());
        let err = CandidateDataset::from_records(records).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateId(CandidateId(1))));
    }

    #[test]
    fn lookup_by_id() {
        let dataset = CandidateDataset::sample();
        let record = dataset.get(CandidateId(4)).expect("record present");
        assert_eq!(record.name, "Emma Davis");
        assert!(dataset.get(CandidateId(99)).is_none());
    }

    #[test]
    fn csv_import_parses_labels_and_scores() {
        let csv = "id,name,department,status,score,date\n\
                   1, Ada Lovelace ,Engineering,Completed,97%,2023-07-01\n\
                   2,Grace Hopper,human_resources,In Progress,-,2023-07-02\n\
                   3,Alan Turing,Product,Pending,,2023-07-03\n";
        let dataset = CandidateDataset::from_reader(Cursor::new(csv)).expect("csv imports");

        assert_eq!(dataset.len(), 3);
        let first = &dataset.records()[0];
        assert_eq!(first.name, "Ada Lovelace");
        assert_eq!(first.score.map(Percentage::value), Some(97));
        assert_eq!(dataset.records()[1].department, Department::HumanResources);
        assert_eq!(dataset.records()[1].status, CandidateStatus::InProgress);
        assert_eq!(dataset.records()[2].score, None);
        assert_eq!(dataset.stats().completion_rate, 33);
    }

    #[test]
    fn csv_import_reports_row_of_bad_department() {
        let csv = "id,name,department,status,score,date\n\
                   1,Ada,Engineering,Completed,90,2023-07-01\n\
                   2,Grace,Finance,Pending,-,2023-07-02\n";
        let err = CandidateDataset::from_reader(Cursor::new(csv)).unwrap_err();
        match err {
            DatasetError::InvalidRow { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(source.kind, "department");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn csv_import_rejects_out_of_range_score_and_bad_date() {
        let csv = "id,name,department,status,score,date\n1,Ada,Sales,Completed,140,2023-07-01\n";
        assert!(matches!(
            CandidateDataset::from_reader(Cursor::new(csv)),
            Err(DatasetError::InvalidRow { line: 2, .. })
        ));

        let csv = "id,name,department,status,score,date\n1,Ada,Sales,Completed,40,07/01/2023\n";
        let err = CandidateDataset::from_reader(Cursor::new(csv)).unwrap_err();
        assert_eq!(err.to_string(), "row 2: unrecognized date '07/01/2023'");
    }

    #[test]
    fn csv_import_of_header_only_is_empty() {
        let csv = "id,name,department,status,score,date\n";
        let dataset = CandidateDataset::from_reader(Cursor::new(csv)).expect("csv imports");
        assert!(dataset.is_empty());
        assert_eq!(dataset.stats().completion_rate, 0);
    }
}
