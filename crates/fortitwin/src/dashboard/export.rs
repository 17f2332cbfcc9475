use std::io::Write;

use serde::Serialize;

use super::domain::{format_score, CandidateRecord};

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: u32,
    name: &'a str,
    department: &'static str,
    status: &'static str,
    score: String,
    date: String,
}

impl<'a> From<&'a CandidateRecord> for ExportRow<'a> {
    fn from(record: &'a CandidateRecord) -> Self {
        Self {
            id: record.id.0,
            name: &record.name,
            department: record.department.label(),
            status: record.status.label(),
            score: format_score(record.score),
            date: record.date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Write rows as CSV in the same column layout the importer reads.
pub fn export_csv<'a, W, I>(records: I, writer: W) -> Result<(), csv::Error>
where
    W: Write,
    I: IntoIterator<Item = &'a CandidateRecord>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(["id", "name", "department", "status", "score", "date"])?;
    for record in records {
        csv_writer.serialize(ExportRow::from(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}
