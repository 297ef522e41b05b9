//! 提交状态机
//!
//! 状态流转规则集中在这里，存储层与服务层只调用，不各自判断。
//!
//! ```text
//! NOT_STARTED -> IN_PROGRESS -> SUBMITTED -> GRADED
//!                    \--------> LATE      -> GRADED
//! ```

use serde::{Deserialize, Serialize};

use crate::models::common::ErrorCode;

// 提交状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    NotStarted, // 未开始
    InProgress, // 进行中
    Submitted,  // 按时提交
    Late,       // 迟交
    Graded,     // 已评分
}

impl SubmissionStatus {
    pub const NOT_STARTED: &'static str = "NOT_STARTED";
    pub const IN_PROGRESS: &'static str = "IN_PROGRESS";
    pub const SUBMITTED: &'static str = "SUBMITTED";
    pub const LATE: &'static str = "LATE";
    pub const GRADED: &'static str = "GRADED";

    /// 是否处于可评分状态（已提交且未评分）
    pub fn is_gradable(&self) -> bool {
        matches!(self, SubmissionStatus::Submitted | SubmissionStatus::Late)
    }

    /// 是否已定稿。评分前允许反复重交覆盖内容，评分后锁定。
    pub fn is_final(&self) -> bool {
        matches!(self, SubmissionStatus::Graded)
    }
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!("无效的提交状态: '{s}'")))
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SubmissionStatus::NotStarted => Self::NOT_STARTED,
            SubmissionStatus::InProgress => Self::IN_PROGRESS,
            SubmissionStatus::Submitted => Self::SUBMITTED,
            SubmissionStatus::Late => Self::LATE,
            SubmissionStatus::Graded => Self::GRADED,
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::NOT_STARTED => Ok(SubmissionStatus::NotStarted),
            Self::IN_PROGRESS => Ok(SubmissionStatus::InProgress),
            Self::SUBMITTED => Ok(SubmissionStatus::Submitted),
            Self::LATE => Ok(SubmissionStatus::Late),
            Self::GRADED => Ok(SubmissionStatus::Graded),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

/// 按提交时刻与截止时刻判定提交状态。
/// 恰好等于截止时刻视为按时。
pub fn classify_submission(
    submitted_at: chrono::DateTime<chrono::Utc>,
    due_date: chrono::DateTime<chrono::Utc>,
) -> SubmissionStatus {
    if submitted_at <= due_date {
        SubmissionStatus::Submitted
    } else {
        SubmissionStatus::Late
    }
}

/// 评分前置检查。已评分的提交不允许二次评分。
pub fn ensure_gradable(status: SubmissionStatus) -> Result<(), ErrorCode> {
    match status {
        SubmissionStatus::Submitted | SubmissionStatus::Late => Ok(()),
        SubmissionStatus::Graded => Err(ErrorCode::SubmissionAlreadyGraded),
        SubmissionStatus::NotStarted | SubmissionStatus::InProgress => {
            Err(ErrorCode::NothingToGrade)
        }
    }
}

/// 得分百分比。未评分或总分非正时返回 None。
pub fn percentage_score(marks_obtained: Option<f64>, total_marks: f64) -> Option<f64> {
    let marks = marks_obtained?;
    if total_marks <= 0.0 {
        return None;
    }
    Some(marks / total_marks * 100.0)
}

/// 截止时间是否已过（恰好等于截止时刻不算过期）
pub fn is_overdue(
    now: chrono::DateTime<chrono::Utc>,
    due_date: chrono::DateTime<chrono::Utc>,
) -> bool {
    now > due_date
}

/// 距截止剩余的整天数，已过期时为 0
pub fn days_remaining(
    now: chrono::DateTime<chrono::Utc>,
    due_date: chrono::DateTime<chrono::Utc>,
) -> i64 {
    (due_date - now).num_days().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, Utc};

    fn at(s: &str) -> chrono::DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_status_round_trip() {
        for s in [
            SubmissionStatus::NotStarted,
            SubmissionStatus::InProgress,
            SubmissionStatus::Submitted,
            SubmissionStatus::Late,
            SubmissionStatus::Graded,
        ] {
            assert_eq!(s.to_string().parse::<SubmissionStatus>().unwrap(), s);
        }
        assert!("WHATEVER".parse::<SubmissionStatus>().is_err());
    }

    #[test]
    fn test_classify_before_due_is_submitted() {
        // 截止前一小时提交
        let due = at("2026-03-10 00:00:00");
        let submitted = at("2026-03-09 23:00:00");
        assert_eq!(
            classify_submission(submitted, due),
            SubmissionStatus::Submitted
        );
    }

    #[test]
    fn test_classify_after_due_is_late() {
        // 截止后一小时提交
        let due = at("2026-03-10 00:00:00");
        let submitted = at("2026-03-10 01:00:00");
        assert_eq!(classify_submission(submitted, due), SubmissionStatus::Late);
    }

    #[test]
    fn test_classify_exactly_at_due_is_submitted() {
        let due = at("2026-03-10 00:00:00");
        assert_eq!(classify_submission(due, due), SubmissionStatus::Submitted);
    }

    #[test]
    fn test_ensure_gradable() {
        assert!(ensure_gradable(SubmissionStatus::Submitted).is_ok());
        assert!(ensure_gradable(SubmissionStatus::Late).is_ok());
        assert_eq!(
            ensure_gradable(SubmissionStatus::Graded),
            Err(ErrorCode::SubmissionAlreadyGraded)
        );
        assert_eq!(
            ensure_gradable(SubmissionStatus::NotStarted),
            Err(ErrorCode::NothingToGrade)
        );
        assert_eq!(
            ensure_gradable(SubmissionStatus::InProgress),
            Err(ErrorCode::NothingToGrade)
        );
    }

    #[test]
    fn test_percentage_score() {
        assert_eq!(percentage_score(Some(85.0), 100.0), Some(85.0));
        assert_eq!(percentage_score(Some(15.0), 20.0), Some(75.0));
        assert_eq!(percentage_score(None, 100.0), None);
        assert_eq!(percentage_score(Some(10.0), 0.0), None);
    }

    #[test]
    fn test_overdue_and_days_remaining() {
        let due = at("2026-03-10 00:00:00");
        assert!(!is_overdue(at("2026-03-09 12:00:00"), due));
        assert!(!is_overdue(due, due));
        assert!(is_overdue(at("2026-03-10 00:00:01"), due));

        assert_eq!(days_remaining(at("2026-03-07 00:00:00"), due), 3);
        assert_eq!(days_remaining(at("2026-03-09 12:00:00"), due), 0);
        // 已过期不出现负天数
        assert_eq!(days_remaining(at("2026-03-12 00:00:00"), due), 0);
    }

    #[test]
    fn test_resubmission_allowed_until_graded() {
        // 评分前提交可反复覆盖
        for s in [
            SubmissionStatus::NotStarted,
            SubmissionStatus::InProgress,
            SubmissionStatus::Submitted,
            SubmissionStatus::Late,
        ] {
            assert!(!s.is_final());
        }
        assert!(SubmissionStatus::Graded.is_final());
    }
}
