use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::access::{Action, Actor, authorize};
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{actor::load_actor, error_code_response};

use super::SubmissionService;

// 学生明确标记「我开始做了」，NOT_STARTED -> IN_PROGRESS。
// 已经开始或已提交时幂等返回当前记录。
pub async fn handle_start(
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

    if !assignment.is_active {
        return Ok(error_code_response(
            ErrorCode::AssignmentInactive,
            "Assignment is no longer active",
        ));
    }

    let actor = match load_actor(&storage, &user).await {
        Ok(actor) => actor,
        Err(e) => {
            return Ok(error_code_response(
                ErrorCode::InternalServerError,
                format!("Failed to load permissions: {e}"),
            ));
        }
    };
    let Actor::Student { student_id, .. } = &actor else {
        return Ok(error_code_response(
            ErrorCode::Forbidden,
            "Only students can start an assignment",
        ));
    };
    let student_id = *student_id;
    if let Err(code) = authorize(
        &actor,
        &Action::WorkOnSubmission {
            assignment_stream_id: assignment.stream_id,
            submission_student_id: student_id,
        },
    ) {
        return Ok(error_code_response(
            code,
            "You are not allowed to work on this assignment",
        ));
    }

    match storage.start_submission(assignment_id, student_id).await {
        Ok(submission) => Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "OK"))),
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to start assignment: {e}"),
        )),
    }
}
