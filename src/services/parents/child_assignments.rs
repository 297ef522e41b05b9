use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde::Serialize;

use crate::access::{Action, authorize};
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    assignments::{entities::Assignment, requests::AssignmentListQuery},
    submissions::{responses::SubmissionDetailResponse, status::SubmissionStatus},
};
use crate::services::{actor::load_actor, error_code_response};

use super::ParentService;

// 家长视角的单个作业条目：作业 + 子女的提交与成绩
#[derive(Debug, Clone, Serialize)]
pub struct ChildAssignmentItem {
    pub assignment: Assignment,
    pub submission_status: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<SubmissionDetailResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChildAssignmentListResponse {
    pub items: Vec<ChildAssignmentItem>,
    pub total: u64,
}

pub async fn handle_child_assignments(
    service: &ParentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_code_response(
            ErrorCode::Unauthorized,
            "Authentication required",
        ));
    };

    // 1. 访问判定：只能看已绑定子女
    let actor = match load_actor(&storage, &user).await {
        Ok(actor) => actor,
        Err(e) => {
            return Ok(error_code_response(
                ErrorCode::InternalServerError,
                format!("Failed to load permissions: {e}"),
            ));
        }
    };
    if let Err(code) = authorize(&actor, &Action::ViewStudent { student_id }) {
        return Ok(error_code_response(
            code,
            "You are not linked to this student",
        ));
    }

    // 2. 子女档案
    let profile = match storage.get_student_profile_by_id(student_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return Ok(error_code_response(
                ErrorCode::StudentNotFound,
                "Student not found",
            ));
        }
        Err(e) => {
            return Ok(error_code_response(
                ErrorCode::InternalServerError,
                format!("Failed to load student: {e}"),
            ));
        }
    };

    // 3. 子女学级的有效作业 + 该子女的提交记录
    match storage
        .list_stream_assignments(profile.stream_id, profile.id, AssignmentListQuery::default())
        .await
    {
        Ok((entries, total)) => {
            let items = entries
                .into_iter()
                .map(|(assignment, submission)| {
                    let submission_status = submission
                        .as_ref()
                        .map(|s| s.status)
                        .unwrap_or(SubmissionStatus::NotStarted);
                    let submission = submission
                        .map(|s| SubmissionDetailResponse::new(s, assignment.total_marks));
                    ChildAssignmentItem {
                        assignment,
                        submission_status,
                        submission,
                    }
                })
                .collect();
            let response = ChildAssignmentListResponse { items, total };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK")))
        }
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to list assignments: {e}"),
        )),
    }
}
