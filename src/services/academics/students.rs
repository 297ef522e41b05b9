use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    teaching::EnrollStudentRequest,
    users::entities::UserRole,
};
use crate::services::error_code_response;

use super::AcademicsService;

// 把一个学生账号编入某个学级
pub async fn handle_enroll_student(
    service: &AcademicsService,
    enroll_request: EnrollStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 账号必须存在且角色为学生
    match storage.get_user_by_id(enroll_request.user_id).await {
        Ok(Some(user)) if user.role == UserRole::Student => {}
        Ok(Some(_)) => {
            return Ok(error_code_response(
                ErrorCode::BadRequest,
                "User is not a student account",
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

    // 2. 学级必须存在
    match storage.get_stream_by_id(enroll_request.stream_id).await {
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

    // 3. 一个账号只能有一份学生档案
    match storage
        .get_student_profile_by_user_id(enroll_request.user_id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(error_code_response(
                ErrorCode::StudentAlreadyEnrolled,
                "Student is already enrolled",
            ));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(error_code_response(
                ErrorCode::InternalServerError,
                format!("Failed to look up student profile: {e}"),
            ));
        }
    }

    match storage.enroll_student(enroll_request).await {
        Ok(profile) => {
            tracing::info!(
                "Student profile {} created for user {} in stream {}",
                profile.id,
                profile.user_id,
                profile.stream_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(profile, "Student enrolled")))
        }
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to enroll student: {e}"),
        )),
    }
}
