//! crates/markbook_core/src/report.rs
//!
//! Pure report statistics over one user's score set. No storage access, no
//! mutation; calling these twice on the same input yields identical output.

use crate::domain::{PieSlice, ReportSummary, ScoreSet, Subject};
use crate::error::CoreError;

/// Computes the report summary for a score set.
///
/// The average is the arithmetic mean of the five subject scores using float
/// division. The series is emitted in `Subject::ALL` order so charts render
/// the same way on every request. A set missing any subject is rejected with
/// [`CoreError::IncompleteScoreSet`] rather than silently averaged over fewer
/// values.
pub fn summarize(scores: &ScoreSet) -> Result<ReportSummary, CoreError> {
    let mut series = Vec::with_capacity(Subject::ALL.len());
    for subject in Subject::ALL {
        let score = scores
            .get(subject)
            .ok_or(CoreError::IncompleteScoreSet(subject))?;
        series.push((subject, score));
    }

    let total: u32 = series.iter().map(|&(_, s)| u32::from(s)).sum();
    let average = f64::from(total) / Subject::ALL.len() as f64;

    Ok(ReportSummary {
        average,
        series,
        total,
    })
}

/// Computes the proportional (pie) view from a summary.
///
/// Each slice carries the subject's score as a fraction of the total. An
/// all-zero summary has no denominator and fails with
/// [`CoreError::DegenerateReport`] instead of dividing by zero.
pub fn proportions(summary: &ReportSummary) -> Result<Vec<PieSlice>, CoreError> {
    if summary.total == 0 {
        return Err(CoreError::DegenerateReport);
    }
    Ok(summary
        .series
        .iter()
        .map(|&(subject, score)| PieSlice {
            subject,
            score,
            fraction: f64::from(score) / f64::from(summary.total),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn scores(values: [u8; 5]) -> ScoreSet {
        let map: BTreeMap<Subject, u8> =
            Subject::ALL.iter().copied().zip(values).collect();
        ScoreSet::new(map).unwrap()
    }

    #[test]
    fn average_of_known_marks() {
        // Maths 80, Physics 60, Chemistry 70, English 90, Hindi 100.
        let summary = summarize(&scores([80, 60, 70, 90, 100])).unwrap();
        assert_eq!(summary.average, 80.0);
        assert_eq!(summary.total, 400);
    }

    #[test]
    fn series_follows_canonical_subject_order() {
        let summary = summarize(&scores([1, 2, 3, 4, 5])).unwrap();
        let order: Vec<Subject> = summary.series.iter().map(|&(s, _)| s).collect();
        assert_eq!(order, Subject::ALL.to_vec());
    }

    #[test]
    fn summarize_is_pure() {
        let set = scores([35, 99, 0, 42, 7]);
        assert_eq!(summarize(&set).unwrap(), summarize(&set).unwrap());
    }

    #[test]
    fn proportions_sum_to_one() {
        let summary = summarize(&scores([80, 60, 70, 90, 100])).unwrap();
        let slices = proportions(&summary).unwrap();
        let sum: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert_eq!(slices[0].fraction, 80.0 / 400.0);
    }

    #[test]
    fn all_zero_scores_are_a_degenerate_pie() {
        let summary = summarize(&scores([0, 0, 0, 0, 0])).unwrap();
        assert_eq!(summary.average, 0.0);
        let err = proportions(&summary).unwrap_err();
        assert!(matches!(err, CoreError::DegenerateReport));
    }

    #[test]
    fn incomplete_set_is_rejected_not_partially_averaged() {
        let mut map = BTreeMap::new();
        map.insert(Subject::Maths, 50u8);
        let err = ScoreSet::new(map).unwrap_err();
        assert!(matches!(err, CoreError::IncompleteScoreSet(Subject::Physics)));
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let map: BTreeMap<Subject, u8> =
            Subject::ALL.iter().copied().zip([10, 20, 101, 40, 50]).collect();
        let err = ScoreSet::new(map).unwrap_err();
        assert!(matches!(
            err,
            CoreError::ScoreOutOfRange { subject: Subject::Chemistry, score: 101 }
        ));
    }
}
