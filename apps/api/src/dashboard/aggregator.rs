//! Dashboard Aggregator — folds analyses into summary statistics.
//!
//! A pure fold with no incremental state: stats are recomputed from a full
//! submission snapshot on every request.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::analysis::pipeline::AnalysisResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub avg_match_score: u32,
    pub avg_ats_score: u32,
    pub total_submissions: usize,
    /// Descending by count; ties keep first-seen order.
    pub common_missing_skills: Vec<SkillCount>,
}

pub fn aggregate<'a, I>(analyses: I) -> DashboardStats
where
    I: IntoIterator<Item = &'a AnalysisResult>,
{
    let mut total = 0usize;
    let mut match_sum = 0u64;
    let mut ats_sum = 0u64;
    let mut counts: Vec<SkillCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for analysis in analyses {
        total += 1;
        match_sum += u64::from(analysis.match_score);
        ats_sum += u64::from(analysis.ats_score);

        for skill in &analysis.missing_skills {
            match index.get(skill.as_str()) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(skill.as_str(), counts.len());
                    counts.push(SkillCount {
                        skill: skill.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));

    DashboardStats {
        avg_match_score: rounded_mean(match_sum, total),
        avg_ats_score: rounded_mean(ats_sum, total),
        total_submissions: total,
        common_missing_skills: counts,
    }
}

fn rounded_mean(sum: u64, n: usize) -> u32 {
    if n == 0 {
        return 0;
    }
    (sum as f64 / n as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(match_score: u32, ats_score: u32, missing: &[&str]) -> AnalysisResult {
        AnalysisResult {
            extracted_skills: vec![],
            required_skills: vec![],
            matched_skills: vec![],
            missing_skills: missing.iter().map(|s| s.to_string()).collect(),
            skill_matches: vec![],
            match_score,
            ats_score,
            feedback: vec![],
        }
    }

    fn counts(stats: &DashboardStats) -> Vec<(&str, u32)> {
        stats
            .common_missing_skills
            .iter()
            .map(|c| (c.skill.as_str(), c.count))
            .collect()
    }

    #[test]
    fn test_empty_history_is_all_zero() {
        let stats = aggregate(&[]);
        assert_eq!(
            stats,
            DashboardStats {
                avg_match_score: 0,
                avg_ats_score: 0,
                total_submissions: 0,
                common_missing_skills: vec![],
            }
        );
    }

    #[test]
    fn test_ties_broken_by_first_seen() {
        let history = vec![
            analysis(50, 50, &["A", "B"]),
            analysis(50, 50, &["A"]),
            analysis(50, 50, &["B", "C"]),
        ];
        let stats = aggregate(&history);
        assert_eq!(counts(&stats), vec![("A", 2), ("B", 2), ("C", 1)]);
    }

    #[test]
    fn test_higher_count_outranks_earlier_skill() {
        let history = vec![
            analysis(0, 0, &["Docker"]),
            analysis(0, 0, &["AWS"]),
            analysis(0, 0, &["AWS"]),
        ];
        let stats = aggregate(&history);
        assert_eq!(counts(&stats), vec![("AWS", 2), ("Docker", 1)]);
    }

    #[test]
    fn test_averages_are_rounded_means() {
        let history = vec![analysis(67, 60, &[]), analysis(100, 95, &[]), analysis(50, 51, &[])];
        let stats = aggregate(&history);
        // (67 + 100 + 50) / 3 = 72.33 ; (60 + 95 + 51) / 3 = 68.67
        assert_eq!(stats.avg_match_score, 72);
        assert_eq!(stats.avg_ats_score, 69);
        assert_eq!(stats.total_submissions, 3);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let history = vec![analysis(40, 45, &["Go"]), analysis(80, 85, &["Go", "Rust"])];
        assert_eq!(aggregate(&history), aggregate(&history));
    }
}
