use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, teaching::CreateTermRequest};
use crate::services::error_code_response;

use super::AcademicsService;

pub async fn handle_create_term(
    service: &AcademicsService,
    mut create_request: CreateTermRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    create_request.name = create_request.name.trim().to_string();
    if create_request.name.is_empty() {
        return Ok(error_code_response(
            ErrorCode::BadRequest,
            "Term name must not be empty",
        ));
    }
    if create_request.ends_on <= create_request.starts_on {
        return Ok(error_code_response(
            ErrorCode::BadRequest,
            "Term must end after it starts",
        ));
    }

    match storage.create_term(create_request).await {
        Ok(term) => {
            tracing::info!("Term {} ({}) created", term.id, term.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(term, "Term created")))
        }
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to create term: {e}"),
        )),
    }
}

pub async fn handle_list_terms(
    service: &AcademicsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_terms().await {
        Ok(terms) => Ok(HttpResponse::Ok().json(ApiResponse::success(terms, "OK"))),
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to list terms: {e}"),
        )),
    }
}
