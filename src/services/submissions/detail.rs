use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::access::{Action, authorize};
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, submissions::responses::SubmissionDetailResponse};
use crate::services::{actor::load_actor, error_code_response};

use super::SubmissionService;

pub async fn handle_detail(
    service: &SubmissionService,
    submission_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_code_response(
            ErrorCode::Unauthorized,
            "Authentication required",
        ));
    };

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(error_code_response(
                ErrorCode::SubmissionNotFound,
                "Submission not found",
            ));
        }
        Err(e) => {
            return Ok(error_code_response(
                ErrorCode::InternalServerError,
                format!("Failed to load submission: {e}"),
            ));
        }
    };
    let assignment = match storage.get_assignment_by_id(submission.assignment_id).await {
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
    if let Err(code) = authorize(
        &actor,
        &Action::ViewSubmission {
            subject_id: assignment.subject_id,
            stream_id: assignment.stream_id,
            created_by: assignment.created_by,
            submission_student_id: submission.student_id,
        },
    ) {
        return Ok(error_code_response(
            code,
            "You are not allowed to view this submission",
        ));
    }

    let response = SubmissionDetailResponse::new(submission, assignment.total_marks);
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK")))
}
