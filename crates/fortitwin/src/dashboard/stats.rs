use serde::Serialize;

use super::domain::{CandidateRecord, CandidateStatus, Department, Percentage};

/// Headline numbers shown above the candidate table. Always computed over the
/// whole dataset, never over a filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_candidates: usize,
    pub completion_rate: u32,
    pub average_score: u32,
}

impl DashboardStats {
    pub fn compute(records: &[CandidateRecord]) -> Self {
        let total_candidates = records.len();
        let completed = records
            .iter()
            .filter(|record| record.status == CandidateStatus::Completed)
            .count();

        let completion_rate = if total_candidates == 0 {
            0
        } else {
            rounded_ratio(100.0 * completed as f64, total_candidates as f64)
        };

        let (sum, scored) = records
            .iter()
            .filter_map(|record| record.score)
            .fold((0u64, 0u64), |(sum, count), score| {
                (sum + u64::from(score.value()), count + 1)
            });
        let average_score = if scored == 0 {
            0
        } else {
            rounded_ratio(sum as f64, scored as f64)
        };

        Self {
            total_candidates,
            completion_rate,
            average_score,
        }
    }
}

fn rounded_ratio(numerator: f64, denominator: f64) -> u32 {
    (numerator / denominator).round() as u32
}

/// Score buckets used by the per-department distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    NinetyToHundred,
    EightyToEightyNine,
    SeventyToSeventyNine,
    SixtyToSixtyNine,
    BelowSixty,
}

impl ScoreBand {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::NinetyToHundred,
            Self::EightyToEightyNine,
            Self::SeventyToSeventyNine,
            Self::SixtyToSixtyNine,
            Self::BelowSixty,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NinetyToHundred => "90-100",
            Self::EightyToEightyNine => "80-89",
            Self::SeventyToSeventyNine => "70-79",
            Self::SixtyToSixtyNine => "60-69",
            Self::BelowSixty => "Below 60",
        }
    }

    pub const fn for_score(score: Percentage) -> Self {
        match score.value() {
            90..=100 => Self::NinetyToHundred,
            80..=89 => Self::EightyToEightyNine,
            70..=79 => Self::SeventyToSeventyNine,
            60..=69 => Self::SixtyToSixtyNine,
            _ => Self::BelowSixty,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::NinetyToHundred => 0,
            Self::EightyToEightyNine => 1,
            Self::SeventyToSeventyNine => 2,
            Self::SixtyToSixtyNine => 3,
            Self::BelowSixty => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCountEntry {
    pub status: CandidateStatus,
    pub status_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBandCount {
    pub band: ScoreBand,
    pub band_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentScoreDistribution {
    pub department: Department,
    pub department_label: &'static str,
    pub bands: Vec<ScoreBandCount>,
}

/// Chart-ready breakdowns of the full dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardBreakdown {
    pub status_counts: Vec<StatusCountEntry>,
    pub score_distribution: Vec<DepartmentScoreDistribution>,
}

impl DashboardBreakdown {
    pub fn compute(records: &[CandidateRecord]) -> Self {
        let status_counts = CandidateStatus::ordered()
            .into_iter()
            .map(|status| StatusCountEntry {
                status,
                status_label: status.label(),
                count: records
                    .iter()
                    .filter(|record| record.status == status)
                    .count(),
            })
            .collect();

        let score_distribution = Department::ordered()
            .into_iter()
            .map(|department| {
                let mut counts = [0usize; 5];
                for score in records
                    .iter()
                    .filter(|record| record.department == department)
                    .filter_map(|record| record.score)
                {
                    counts[ScoreBand::for_score(score).index()] += 1;
                }

                DepartmentScoreDistribution {
                    department,
                    department_label: department.label(),
                    bands: ScoreBand::ordered()
                        .into_iter()
                        .map(|band| ScoreBandCount {
                            band,
                            band_label: band.label(),
                            count: counts[band.index()],
                        })
                        .collect(),
                }
            })
            .collect();

        Self {
            status_counts,
            score_distribution,
        }
    }
}
