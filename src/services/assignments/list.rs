use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, assignments::requests::AssignmentListQuery,
    users::entities::UserRole,
};
use crate::services::error_code_response;

use super::AssignmentService;

// 教师视角：本人发布的作业；管理员：全部作业
pub async fn handle_list(
    service: &AssignmentService,
    query: AssignmentListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_code_response(
            ErrorCode::Unauthorized,
            "Authentication required",
        ));
    };

    let created_by = match user.role {
        UserRole::Admin => None,
        _ => Some(user.id),
    };

    match storage
        .list_assignments_with_pagination(query, created_by)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK"))),
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to list assignments: {e}"),
        )),
    }
}
