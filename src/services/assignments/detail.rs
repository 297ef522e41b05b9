use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::access::{Action, Actor, authorize};
use crate::middlewares::RequireJWT;
use crate::models::assignments::responses::AssignmentDetailResponse;
use crate::models::submissions::responses::SubmissionDetailResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{actor::load_actor, error_code_response};

use super::AssignmentService;

pub async fn handle_detail(
    service: &AssignmentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_code_response(
            ErrorCode::Unauthorized,
            "Authentication required",
        ));
    };

    let assignment = match storage.get_assignment_by_id(id).await {
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
        &Action::ViewAssignment {
            subject_id: assignment.subject_id,
            stream_id: assignment.stream_id,
            is_active: assignment.is_active,
        },
    ) {
        return Ok(error_code_response(
            code,
            "You are not allowed to view this assignment",
        ));
    }

    // 管理员与创建教师附带全部提交，学生附带（并按需建档）本人提交
    let mut detail = AssignmentDetailResponse {
        assignment,
        submissions: None,
        my_submission: None,
    };
    let sees_all_submissions = match &actor {
        Actor::Admin { .. } => true,
        // 非创建者的同科教师只能看到作业本身
        Actor::Teacher { user_id, .. } => detail.assignment.created_by == *user_id,
        _ => false,
    };
    match &actor {
        Actor::Admin { .. } | Actor::Teacher { .. } if sees_all_submissions => {
            match storage.list_submissions_for_assignment(detail.assignment.id).await {
                Ok(submissions) => {
                    detail.submissions = Some(
                        submissions
                            .into_iter()
                            .map(|s| {
                                SubmissionDetailResponse::new(s, detail.assignment.total_marks)
                            })
                            .collect(),
                    );
                }
                Err(e) => {
                    return Ok(error_code_response(
                        ErrorCode::InternalServerError,
                        format!("Failed to load submissions: {e}"),
                    ));
                }
            }
        }
        Actor::Student { student_id, .. } => {
            // 能走到这里说明作业有效，按需建档本人的提交记录
            match storage
                .get_or_create_submission(detail.assignment.id, *student_id)
                .await
            {
                Ok(submission) => {
                    detail.my_submission = Some(SubmissionDetailResponse::new(
                        submission,
                        detail.assignment.total_marks,
                    ));
                }
                Err(e) => {
                    return Ok(error_code_response(
                        ErrorCode::InternalServerError,
                        format!("Failed to load submission: {e}"),
                    ));
                }
            }
        }
        _ => {}
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "OK")))
}
