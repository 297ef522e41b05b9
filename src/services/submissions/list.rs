use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::access::{Action, authorize};
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    submissions::responses::{SubmissionDetailResponse, SubmissionListResponse},
};
use crate::services::{actor::load_actor, error_code_response};

use super::SubmissionService;

// 教师查看某作业下全部学生的提交情况
pub async fn handle_list_for_assignment(
    service: &SubmissionService,
    assignment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_code_response(
            ErrorCode::Unauthorized,
            "Authentication required",
        ));
    };

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(error_code_response(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            ));
        }
        Err(e) => {
            return Ok(error_code_response(
                ErrorCode::InternalServerError,
                format!("Failed to load assignment: {e}"),
            ));
        }
    };

    let actor = match load_actor(&storage, &user).await {
        Ok(actor) => actor,
        Err(e) => {
            return Ok(error_code_response(
                ErrorCode::InternalServerError,
                format!("Failed to load permissions: {e}"),
            ));
        }
    };
    // 查看全班提交与评分是同一级别的权限
    if let Err(code) = authorize(
        &actor,
        &Action::GradeSubmission {
            subject_id: assignment.subject_id,
            stream_id: assignment.stream_id,
            created_by: assignment.created_by,
        },
    ) {
        return Ok(error_code_response(
            code,
            "You are not allowed to view submissions for this assignment",
        ));
    }

    match storage.list_submissions_for_assignment(assignment_id).await {
        Ok(submissions) => {
            let total = submissions.len() as u64;
            let items = submissions
                .into_iter()
                .map(|s| SubmissionDetailResponse::new(s, assignment.total_marks))
                .collect();
            let response = SubmissionListResponse { items, total };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK")))
        }
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to list submissions: {e}"),
        )),
    }
}
