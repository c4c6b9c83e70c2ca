//! HR candidate listing: filter submissions by job and match-score range.

use serde::Deserialize;

use crate::models::submission::SubmissionRecord;

/// Score bounds arrive as raw query strings; a bound that does not parse
/// as a number is ignored rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateFilter {
    pub job_id: Option<String>,
    pub min_score: Option<String>,
    pub max_score: Option<String>,
}

fn bound(raw: &Option<String>) -> Option<f64> {
    raw.as_deref()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| !v.is_nan())
}

impl CandidateFilter {
    fn accepts(&self, record: &SubmissionRecord) -> bool {
        let score = f64::from(record.analysis_result.match_score);
        self.job_id
            .as_deref()
            .map_or(true, |id| record.job_id.as_deref() == Some(id))
            && bound(&self.min_score).map_or(true, |min| score >= min)
            && bound(&self.max_score).map_or(true, |max| score <= max)
    }
}

/// Records accepted by `filter`, best match first. Equal scores keep log order.
pub fn list_candidates<'a>(
    records: &'a [SubmissionRecord],
    filter: &CandidateFilter,
) -> Vec<&'a SubmissionRecord> {
    let mut selected: Vec<&SubmissionRecord> =
        records.iter().filter(|r| filter.accepts(r)).collect();
    selected.sort_by(|a, b| {
        b.analysis_result
            .match_score
            .cmp(&a.analysis_result.match_score)
    });
    selected
}
