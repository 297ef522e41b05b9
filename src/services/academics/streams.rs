use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode, teaching::CreateStreamRequest};
use crate::services::error_code_response;

use super::AcademicsService;

pub async fn handle_create_stream(
    service: &AcademicsService,
    create_request: CreateStreamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let name = create_request.name.trim().to_string();
    if name.is_empty() {
        return Ok(error_code_response(
            ErrorCode::BadRequest,
            "Stream name must not be empty",
        ));
    }

    // 名称唯一
    match storage.get_stream_by_name(&name).await {
        Ok(Some(_)) => {
            return Ok(error_code_response(
                ErrorCode::StreamAlreadyExists,
                "Stream already exists",
            ));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(error_code_response(
                ErrorCode::InternalServerError,
                format!("Failed to look up stream: {e}"),
            ));
        }
    }

    match storage.create_stream(&name, None).await {
        Ok(stream) => {
            tracing::info!("Stream {} ({}) created", stream.id, stream.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(stream, "Stream created")))
        }
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to create stream: {e}"),
        )),
    }
}

pub async fn handle_list_streams(
    service: &AcademicsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_streams().await {
        Ok(streams) => Ok(HttpResponse::Ok().json(ApiResponse::success(streams, "OK"))),
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to list streams: {e}"),
        )),
    }
}
