use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    teaching::AssignTeachingRequest,
    users::entities::UserRole,
};
use crate::services::error_code_response;

use super::AcademicsService;

// 给教师分配（科目, 学级）授课对，这是教师一切作业权限的来源
pub async fn handle_assign_teaching(
    service: &AcademicsService,
    assign_request: AssignTeachingRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 账号必须存在且角色为教师
    match storage.get_user_by_id(assign_request.teacher_id).await {
        Ok(Some(user)) if user.role == UserRole::Teacher => {}
        Ok(Some(_)) => {
            return Ok(error_code_response(
                ErrorCode::BadRequest,
                "User is not a teacher account",
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

    // 2. 科目与学级必须存在
    match storage.get_subject_by_id(assign_request.subject_id).await {
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
    match storage.get_stream_by_id(assign_request.stream_id).await {
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

    // 3. 幂等：同一授课对重复分配时返回已有记录
    match storage
        .list_teaching_for_teacher(assign_request.teacher_id)
        .await
    {
        Ok(existing) => {
            if let Some(teaching) = existing.into_iter().find(|t| {
                t.subject_id == assign_request.subject_id
                    && t.stream_id == assign_request.stream_id
            }) {
                return Ok(
                    HttpResponse::Ok().json(ApiResponse::success(teaching, "Teaching already assigned"))
                );
            }
        }
        Err(e) => {
            return Ok(error_code_response(
                ErrorCode::InternalServerError,
                format!("Failed to look up teaching assignments: {e}"),
            ));
        }
    }

    match storage.assign_teaching(assign_request).await {
        Ok(teaching) => {
            tracing::info!(
                "Teacher {} assigned to subject {} in stream {}",
                teaching.teacher_id,
                teaching.subject_id,
                teaching.stream_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(teaching, "Teaching assigned")))
        }
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to assign teaching: {e}"),
        )),
    }
}

// 查看某教师的授课记录：管理员可查任何人，教师只能查本人
pub async fn handle_list_teaching(
    service: &AcademicsService,
    teacher_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = crate::middlewares::RequireJWT::extract_user_claims(request) else {
        return Ok(error_code_response(
            ErrorCode::Unauthorized,
            "Authentication required",
        ));
    };
    if user.role == UserRole::Teacher && user.id != teacher_id {
        return Ok(error_code_response(
            ErrorCode::Forbidden,
            "Teachers may only view their own teaching assignments",
        ));
    }

    match storage.list_teaching_for_teacher(teacher_id).await {
        Ok(teaching) => Ok(HttpResponse::Ok().json(ApiResponse::success(teaching, "OK"))),
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to list teaching assignments: {e}"),
        )),
    }
}
