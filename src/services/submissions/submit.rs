use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::access::{Action, Actor, authorize};
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    submissions::{requests::SubmitRequest, responses::SubmissionDetailResponse, status},
};
use crate::services::{actor::load_actor, error_code_response};
use crate::utils::validate::validate_submission_content;

use super::SubmissionService;

// 学生提交作业内容。按服务器时钟与截止时间比较判定 SUBMITTED / LATE，
// 恰好等于截止时刻算按时。已提交过的记录不允许再改。
pub async fn handle_submit(
    service: &SubmissionService,
    assignment_id: i64,
    submit_request: SubmitRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_code_response(
            ErrorCode::Unauthorized,
            "Authentication required",
        ));
    };

    // 1. 内容校验：文字或附件至少有其一
    if let Err(msg) = validate_submission_content(
        submit_request.text.as_deref(),
        submit_request.file_token.as_deref(),
    ) {
        return Ok(error_code_response(ErrorCode::SubmissionContentMissing, msg));
    }

    // 2. 作业必须存在且有效
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

    // 3. 附件 token 必须指向已登记的文件
    if let Some(ref token) = submit_request.file_token {
        match storage.get_file_by_token(token).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(error_code_response(
                    ErrorCode::FileNotFound,
                    "Attached file not found",
                ));
            }
            Err(e) => {
                return Ok(error_code_response(
                    ErrorCode::InternalServerError,
                    format!("Failed to look up file: {e}"),
                ));
            }
        }
    }

    // 4. 访问判定
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
            "Only students can submit an assignment",
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
            "You are not allowed to submit this assignment",
        ));
    }

    // 5. 按服务器时钟判定按时 / 迟交
    let now = chrono::Utc::now();
    let new_status = status::classify_submission(now, assignment.due_date);

    // 6. 条件更新，评分前可反复提交，每次按本次时刻重新判定状态
    match storage
        .submit_submission(
            assignment_id,
            student_id,
            submit_request.text,
            submit_request.file_token,
            new_status,
            now,
        )
        .await
    {
        Ok(Some(submission)) => {
            tracing::info!(
                "Student {} submitted assignment {} with status {}",
                student_id,
                assignment_id,
                submission.status
            );
            let response = SubmissionDetailResponse::new(submission, assignment.total_marks);
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Submission received")))
        }
        // 已评分的记录锁定，不再接受重交
        Ok(None) => Ok(error_code_response(
            ErrorCode::SubmissionAlreadyGraded,
            "Submission has already been graded",
        )),
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to submit assignment: {e}"),
        )),
    }
}
