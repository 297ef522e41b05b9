use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, teaching::CreateSubjectRequest};
use crate::services::error_code_response;

use super::AcademicsService;

pub async fn handle_create_subject(
    service: &AcademicsService,
    create_request: CreateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let name = create_request.name.trim().to_string();
    if name.is_empty() {
        return Ok(error_code_response(
            ErrorCode::BadRequest,
            "Subject name must not be empty",
        ));
    }

    // 名称唯一
    match storage.get_subject_by_name(&name).await {
        Ok(Some(_)) => {
            return Ok(error_code_response(
                ErrorCode::SubjectAlreadyExists,
                "Subject already exists",
            ));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(error_code_response(
                ErrorCode::InternalServerError,
                format!("Failed to look up subject: {e}"),
            ));
        }
    }

    match storage.create_subject(&name).await {
        Ok(subject) => {
            tracing::info!("Subject {} ({}) created", subject.id, subject.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(subject, "Subject created")))
        }
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to create subject: {e}"),
        )),
    }
}

pub async fn handle_list_subjects(
    service: &AcademicsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_subjects().await {
        Ok(subjects) => Ok(HttpResponse::Ok().json(ApiResponse::success(subjects, "OK"))),
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to list subjects: {e}"),
        )),
    }
}
