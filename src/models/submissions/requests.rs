use serde::Deserialize;

// 提交作业请求（文字与附件至少有其一）
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRequest {
    pub text: Option<String>,
    pub file_token: Option<String>,
}

// 评分请求
#[derive(Debug, Clone, Deserialize)]
pub struct GradeRequest {
    pub marks_obtained: f64,
    pub remarks: Option<String>,
}
