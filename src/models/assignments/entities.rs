use serde::{Deserialize, Serialize};

// 作业类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentKind {
    Homework,          // 日常作业
    HolidayAssignment, // 假期作业
    Project,           // 项目
    Revision,          // 复习
    Other,             // 其他
}

impl AssignmentKind {
    pub const HOMEWORK: &'static str = "HOMEWORK";
    pub const HOLIDAY_ASSIGNMENT: &'static str = "HOLIDAY_ASSIGNMENT";
    pub const PROJECT: &'static str = "PROJECT";
    pub const REVISION: &'static str = "REVISION";
    pub const OTHER: &'static str = "OTHER";
}

impl<'de> Deserialize<'de> for AssignmentKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的作业类型: '{s}'. 支持: HOMEWORK, HOLIDAY_ASSIGNMENT, PROJECT, REVISION, OTHER"
            ))
        })
    }
}

impl std::fmt::Display for AssignmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AssignmentKind::Homework => Self::HOMEWORK,
            AssignmentKind::HolidayAssignment => Self::HOLIDAY_ASSIGNMENT,
            AssignmentKind::Project => Self::PROJECT,
            AssignmentKind::Revision => Self::REVISION,
            AssignmentKind::Other => Self::OTHER,
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for AssignmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::HOMEWORK => Ok(AssignmentKind::Homework),
            Self::HOLIDAY_ASSIGNMENT => Ok(AssignmentKind::HolidayAssignment),
            Self::PROJECT => Ok(AssignmentKind::Project),
            Self::REVISION => Ok(AssignmentKind::Revision),
            Self::OTHER => Ok(AssignmentKind::Other),
            _ => Err(format!("Invalid assignment kind: {s}")),
        }
    }
}

// 作业
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    // 唯一 ID
    pub id: i64,
    // 标题
    pub title: String,
    // 详细说明
    pub description: String,
    // 作业类型
    pub kind: AssignmentKind,
    // 科目 ID
    pub subject_id: i64,
    // 学级 ID
    pub stream_id: i64,
    // 学期 ID（可选）
    pub term_id: Option<i64>,
    // 创建教师 ID
    pub created_by: i64,
    // 附件文件 token（可选）
    pub file_token: Option<String>,
    // 总分
    pub total_marks: f64,
    // 截止时间
    pub due_date: chrono::DateTime<chrono::Utc>,
    // 是否有效（停用代替删除，保留提交历史）
    pub is_active: bool,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Assignment {
    /// 截止时间是否已过
    pub fn is_overdue(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        crate::models::submissions::status::is_overdue(now, self.due_date)
    }

    /// 距截止还剩多少个整天
    pub fn days_remaining(&self, now: chrono::DateTime<chrono::Utc>) -> i64 {
        crate::models::submissions::status::days_remaining(now, self.due_date)
    }
}
