pub mod academics;
pub mod actor;
pub mod assignments;
pub mod auth;
pub mod files;
pub mod parents;
pub mod submissions;

pub use academics::AcademicsService;
pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use files::FileService;
pub use parents::ParentService;
pub use submissions::SubmissionService;

use actix_web::{HttpResponse, http::StatusCode};

use crate::models::{ApiResponse, ErrorCode};

/// 把业务错误码映射成带对应 HTTP 状态的响应
pub(crate) fn error_code_response(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    let status = match code {
        ErrorCode::Unauthorized | ErrorCode::AuthFailed => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden
        | ErrorCode::NotAuthorizedForSubjectStream
        | ErrorCode::NotInStream
        | ErrorCode::ParentReadOnly => StatusCode::FORBIDDEN,
        ErrorCode::NotFound
        | ErrorCode::UserNotFound
        | ErrorCode::StreamNotFound
        | ErrorCode::SubjectNotFound
        | ErrorCode::StudentNotFound
        | ErrorCode::AssignmentNotFound
        | ErrorCode::SubmissionNotFound
        | ErrorCode::FileNotFound => StatusCode::NOT_FOUND,
        ErrorCode::UserAlreadyExists
        | ErrorCode::StreamAlreadyExists
        | ErrorCode::SubjectAlreadyExists
        | ErrorCode::StudentAlreadyEnrolled
        | ErrorCode::GuardianLinkExists
        | ErrorCode::SubmissionAlreadyGraded => StatusCode::CONFLICT,
        ErrorCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::FileSizeExceeded => StatusCode::PAYLOAD_TOO_LARGE,
        _ => StatusCode::BAD_REQUEST,
    };
    HttpResponse::build(status).json(ApiResponse::<()>::error_empty(code, message))
}
