//! The persisted shape of an assessment.

use chrono::{DateTime, Utc};
use formtrack_core::{Assessment, Exercise, FormStatus};
use serde::{Deserialize, Serialize};

/// One assessment as a store sees it: the verdict flattened to the four
/// dashboard fields, with the no-issue sentinel filled in and a timestamp
/// taken from the client clock at send time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureRecord {
    /// Form verdict label (`"correct"` / `"wrong"`)
    pub status: FormStatus,
    /// Classified exercise
    pub exercise: Exercise,
    /// Issue text, or the em-dash sentinel when form was correct
    pub issue: String,
    /// When this record was produced
    pub timestamp: DateTime<Utc>,
}

impl PostureRecord {
    /// Builds a record from an assessment with an explicit timestamp.
    #[must_use]
    pub fn from_assessment(assessment: &Assessment, timestamp: DateTime<Utc>) -> Self {
        Self {
            status: assessment.status,
            exercise: assessment.exercise,
            issue: assessment.issue_label().to_owned(),
            timestamp,
        }
    }

    /// Builds a record stamped with the current time.
    #[must_use]
    pub fn now(assessment: &Assessment) -> Self {
        Self::from_assessment(assessment, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use formtrack_core::NO_ISSUE;

    #[test]
    fn test_record_fills_issue_sentinel() {
        let ts = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let record = PostureRecord::from_assessment(&Assessment::correct(Exercise::Squat), ts);

        assert_eq!(record.status, FormStatus::Correct);
        assert_eq!(record.issue, NO_ISSUE);
        assert_eq!(record.timestamp, ts);
    }

    #[test]
    fn test_record_keeps_issue_text() {
        let assessment = Assessment::wrong(Exercise::Deadlift, "Not hinging (too upright)");
        let record = PostureRecord::now(&assessment);

        assert_eq!(record.exercise, Exercise::Deadlift);
        assert_eq!(record.issue, "Not hinging (too upright)");
    }

    #[test]
    fn test_record_serializes_dashboard_labels() {
        let ts = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let assessment = Assessment::wrong(Exercise::BicepCurl, "Wrist too high (not curl form)");
        let json = serde_json::to_value(PostureRecord::from_assessment(&assessment, ts)).unwrap();

        assert_eq!(json["status"], "wrong");
        assert_eq!(json["exercise"], "Bicep Curl");
        assert_eq!(json["issue"], "Wrist too high (not curl form)");
    }
}
