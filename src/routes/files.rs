use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::middlewares;
use crate::models::files::entities::FilePurpose;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::FileService;
use crate::utils::SafeFileToken;

// 懒加载的全局 FileService 实例
static FILE_SERVICE: Lazy<FileService> = Lazy::new(FileService::new_lazy);

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    // assignment（作业附件）或 submission（学生提交）
    pub purpose: String,
}

pub async fn handle_upload(
    request: HttpRequest,
    params: web::Query<UploadParams>,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    let purpose = match params.purpose.parse::<FilePurpose>() {
        Ok(p) => p,
        Err(e) => {
            return Ok(
                HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, e))
            );
        }
    };
    FILE_SERVICE.handle_upload(&request, purpose, payload).await
}

pub async fn handle_download(
    request: HttpRequest,
    file_token: SafeFileToken,
) -> ActixResult<HttpResponse> {
    FILE_SERVICE.handle_download(&request, file_token.0).await
}

// 配置路由
pub fn configure_file_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/files")
            .wrap(middlewares::RequireJWT)
            .wrap(middleware::Compress::default())
            .route("/upload", web::post().to(handle_upload))
            .route("/download/{token}", web::get().to(handle_download)),
    );
}
