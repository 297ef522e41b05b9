use serde::Serialize;

use super::entities::Assignment;
use crate::models::PaginationInfo;
use crate::models::submissions::responses::SubmissionDetailResponse;
use crate::models::submissions::status::SubmissionStatus;

// 作业列表响应
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentListResponse {
    pub items: Vec<Assignment>,
    pub pagination: PaginationInfo,
}

// 作业详情：教师与管理员附带全部提交，学生附带本人提交
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentDetailResponse {
    #[serde(flatten)]
    pub assignment: Assignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submissions: Option<Vec<SubmissionDetailResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_submission: Option<SubmissionDetailResponse>,
}

// 学生视角的作业条目：作业信息附带本人的提交状态
#[derive(Debug, Clone, Serialize)]
pub struct StudentAssignmentItem {
    #[serde(flatten)]
    pub assignment: Assignment,
    // 学生本人的提交状态（从未创建提交记录时为 NOT_STARTED）
    pub submission_status: SubmissionStatus,
    // 是否已过截止
    pub overdue: bool,
    // 距截止剩余整天数
    pub days_remaining: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentAssignmentListResponse {
    pub items: Vec<StudentAssignmentItem>,
    pub pagination: PaginationInfo,
}
