use serde::{Deserialize, Serialize};

// 学级（如「三年级 A 班」）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stream {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 科目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 学期
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    pub id: i64,
    pub name: String,
    pub starts_on: chrono::DateTime<chrono::Utc>,
    pub ends_on: chrono::DateTime<chrono::Utc>,
    pub is_current: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 授课记录：某教师在某学级教某科目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeachingAssignment {
    pub id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub stream_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 监护关系：家长与学生档案的绑定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardianLink {
    pub id: i64,
    pub parent_id: i64,
    // 学生档案 ID
    pub student_id: i64,
    // 与学生的关系（mother, father, guardian 等）
    pub relationship: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
