use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::access::{Action, authorize};
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{actor::load_actor, error_code_response};

use super::AssignmentService;

// 停用代替删除：历史提交保持可查
pub async fn handle_deactivate(
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

    if !assignment.is_active {
        return Ok(error_code_response(
            ErrorCode::AssignmentInactive,
            "Assignment is already inactive",
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
    if let Err(code) = authorize(
        &actor,
        &Action::DeactivateAssignment {
            subject_id: assignment.subject_id,
            stream_id: assignment.stream_id,
            created_by: assignment.created_by,
        },
    ) {
        return Ok(error_code_response(
            code,
            "You are not allowed to deactivate this assignment",
        ));
    }

    match storage.deactivate_assignment(id).await {
        Ok(true) => {
            tracing::info!("Assignment {} deactivated by user {}", id, user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Assignment deactivated")))
        }
        Ok(false) => Ok(error_code_response(
            ErrorCode::AssignmentInactive,
            "Assignment is already inactive",
        )),
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to deactivate assignment: {e}"),
        )),
    }
}
