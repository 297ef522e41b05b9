use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::access::{Action, authorize};
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    submissions::{requests::GradeRequest, responses::SubmissionDetailResponse, status},
};
use crate::services::{actor::load_actor, error_code_response};
use crate::utils::validate::validate_marks_obtained;

use super::SubmissionService;

// 教师评分。评分是一次性的：GRADED 之后不允许再改，
// 并发评分通过存储层的条件更新保证只有一个请求生效。
pub async fn handle_grade(
    service: &SubmissionService,
    submission_id: i64,
    grade_request: GradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_code_response(
            ErrorCode::Unauthorized,
            "Authentication required",
        ));
    };

    // 1. 提交与所属作业必须存在
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

    // 2. 分数必须落在 [0, total_marks]
    if let Err(msg) = validate_marks_obtained(grade_request.marks_obtained, assignment.total_marks)
    {
        return Ok(error_code_response(ErrorCode::MarksOutOfRange, msg));
    }

    // 3. 访问判定：评分教师必须教该（科目, 学级）
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
        &Action::GradeSubmission {
            subject_id: assignment.subject_id,
            stream_id: assignment.stream_id,
            created_by: assignment.created_by,
        },
    ) {
        return Ok(error_code_response(
            code,
            "You are not allowed to grade this submission",
        ));
    }

    // 4. 状态前置检查，便于给出准确的错误码
    if let Err(code) = status::ensure_gradable(submission.status) {
        let message = match code {
            ErrorCode::SubmissionAlreadyGraded => "Submission has already been graded",
            _ => "Submission has no content to grade yet",
        };
        return Ok(error_code_response(code, message));
    }

    // 5. 条件更新落库，并发时只有一个评分生效
    match storage
        .grade_submission(
            submission_id,
            user.id,
            grade_request.marks_obtained,
            grade_request.remarks,
        )
        .await
    {
        Ok(Some(graded)) => {
            tracing::info!(
                "Submission {} graded by user {}: {}/{}",
                submission_id,
                user.id,
                grade_request.marks_obtained,
                assignment.total_marks
            );
            let response = SubmissionDetailResponse::new(graded, assignment.total_marks);
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Submission graded")))
        }
        // 状态检查与更新之间被并发请求抢先
        Ok(None) => Ok(error_code_response(
            ErrorCode::SubmissionAlreadyGraded,
            "Submission has already been graded",
        )),
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to grade submission: {e}"),
        )),
    }
}
