use serde::{Deserialize, Serialize};

use super::status::SubmissionStatus;

// 学生提交记录（每个作业每个学生至多一条）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    // 唯一 ID
    pub id: i64,
    // 所属作业 ID
    pub assignment_id: i64,
    // 学生档案 ID
    pub student_id: i64,
    // 当前状态
    pub status: SubmissionStatus,
    // 提交附件 token（可选）
    pub file_token: Option<String>,
    // 文字答案（可选）
    pub text: Option<String>,
    // 提交时刻
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    // 得分
    pub marks_obtained: Option<f64>,
    // 评语
    pub remarks: Option<String>,
    // 评分教师 ID
    pub graded_by: Option<i64>,
    // 评分时刻
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Submission {
    /// 得分百分比，未评分时为 None
    pub fn percentage_score(&self, total_marks: f64) -> Option<f64> {
        super::status::percentage_score(self.marks_obtained, total_marks)
    }
}
