use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStreamRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubjectRequest {
    pub name: String,
}

// 学期：标记为当期时会取消其他学期的当期标记
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTermRequest {
    pub name: String,
    pub starts_on: chrono::DateTime<chrono::Utc>,
    pub ends_on: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub is_current: bool,
}

// 学生入级：把某个学生用户编入某个学级
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollStudentRequest {
    pub user_id: i64,
    pub stream_id: i64,
    // 学籍号（可选）
    pub admission_number: Option<String>,
}

// 授课分配：教师 + 科目 + 学级
#[derive(Debug, Clone, Deserialize)]
pub struct AssignTeachingRequest {
    pub teacher_id: i64,
    pub subject_id: i64,
    pub stream_id: i64,
}

// 家长绑定
#[derive(Debug, Clone, Deserialize)]
pub struct LinkGuardianRequest {
    pub parent_id: i64,
    pub student_id: i64,
    pub relationship: Option<String>,
}
