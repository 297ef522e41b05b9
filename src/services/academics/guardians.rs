use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    teaching::LinkGuardianRequest,
    users::entities::UserRole,
};
use crate::services::error_code_response;

use super::AcademicsService;

// 把家长账号绑定到学生档案，家长的一切只读可见性来自这条记录
pub async fn handle_link_guardian(
    service: &AcademicsService,
    link_request: LinkGuardianRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 账号必须存在且角色为家长
    match storage.get_user_by_id(link_request.parent_id).await {
        Ok(Some(user)) if user.role == UserRole::Parent => {}
        Ok(Some(_)) => {
            return Ok(error_code_response(
                ErrorCode::BadRequest,
                "User is not a parent account",
            ));
        }
        Ok(None) => {
            return Ok(error_code_response(
                ErrorCode::UserNotFound,
                "User not found",
            ));
        }
        Err(e) => {
            return Ok(error_code_response(
                ErrorCode::InternalServerError,
                format!("Failed to look up user: {e}"),
            ));
        }
    }

    // 2. 学生档案必须存在
    match storage
        .get_student_profile_by_id(link_request.student_id)
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(error_code_response(
                ErrorCode::StudentNotFound,
                "Student not found",
            ));
        }
        Err(e) => {
            return Ok(error_code_response(
                ErrorCode::InternalServerError,
                format!("Failed to look up student: {e}"),
            ));
        }
    }

    // 3. 同一对（家长, 学生）不可重复绑定
    match storage.list_children_of_parent(link_request.parent_id).await {
        Ok(children) => {
            if children.iter().any(|c| c.id == link_request.student_id) {
                return Ok(error_code_response(
                    ErrorCode::GuardianLinkExists,
                    "Guardian link already exists",
                ));
            }
        }
        Err(e) => {
            return Ok(error_code_response(
                ErrorCode::InternalServerError,
                format!("Failed to look up guardian links: {e}"),
            ));
        }
    }

    match storage.link_guardian(link_request).await {
        Ok(link) => {
            tracing::info!(
                "Parent {} linked to student {} ({})",
                link.parent_id,
                link.student_id,
                link.relationship
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(link, "Guardian linked")))
        }
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to link guardian: {e}"),
        )),
    }
}
