use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::access::{Action, authorize};
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, assignments::requests::CreateAssignmentRequest};
use crate::services::{actor::load_actor, error_code_response};
use crate::utils::validate::validate_total_marks;

use super::AssignmentService;

pub async fn handle_create(
    service: &AssignmentService,
    create_request: CreateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_code_response(
            ErrorCode::Unauthorized,
            "Authentication required",
        ));
    };

    // 1. 基本字段校验
    if create_request.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Title must not be empty",
        )));
    }
    if let Err(msg) = validate_total_marks(create_request.total_marks) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::TotalMarksInvalid, msg)));
    }
    // 2. 引用的科目与学级必须存在
    match storage.get_subject_by_id(create_request.subject_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(error_code_response(
                ErrorCode::SubjectNotFound,
                "Subject not found",
            ));
        }
        Err(e) => {
            return Ok(error_code_response(
                ErrorCode::InternalServerError,
                format!("Failed to look up subject: {e}"),
            ));
        }
    }
    match storage.get_stream_by_id(create_request.stream_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(error_code_response(
                ErrorCode::StreamNotFound,
                "Stream not found",
            ));
        }
        Err(e) => {
            return Ok(error_code_response(
                ErrorCode::InternalServerError,
                format!("Failed to look up stream: {e}"),
            ));
        }
    }

    // 3. 附件 token 必须指向已登记的文件
    if let Some(ref token) = create_request.file_token {
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

    // 4. 访问判定：发布者必须教这个（科目, 学级）
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
        &Action::CreateAssignment {
            subject_id: create_request.subject_id,
            stream_id: create_request.stream_id,
        },
    ) {
        return Ok(error_code_response(
            code,
            "You are not assigned to teach this subject in this stream",
        ));
    }

    // 5. 落库
    match storage.create_assignment(user.id, create_request).await {
        Ok(assignment) => {
            tracing::info!(
                "Assignment {} created by user {} for stream {}",
                assignment.id,
                user.id,
                assignment.stream_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(assignment, "Assignment created")))
        }
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to create assignment: {e}"),
        )),
    }
}
