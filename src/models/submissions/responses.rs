use serde::Serialize;

use super::entities::Submission;

// 提交详情响应，附带按总分换算的百分比
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionDetailResponse {
    #[serde(flatten)]
    pub submission: Submission,
    pub percentage_score: Option<f64>,
}

impl SubmissionDetailResponse {
    pub fn new(submission: Submission, total_marks: f64) -> Self {
        let percentage_score = submission.percentage_score(total_marks);
        Self {
            submission,
            percentage_score,
        }
    }
}

// 教师视角：某作业下全部学生的提交列表
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionListResponse {
    pub items: Vec<SubmissionDetailResponse>,
    pub total: u64,
}
