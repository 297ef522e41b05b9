//! 路径参数安全提取器
//!
//! actix 默认的路径解析失败会返回一段纯文本 404/400，
//! 这里统一换成 ApiResponse 格式的 400 响应。

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, err, ok};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::common::{ApiResponse, ErrorCode};

fn bad_request(message: impl Into<String>) -> actix_web::Error {
    actix_web::error::InternalError::from_response(
        "parameter error",
        actix_web::HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error_empty(ErrorCode::BadRequest, message)),
    )
    .into()
}

fn parse_i64_param(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    let raw = req
        .match_info()
        .get(name)
        .ok_or_else(|| bad_request(format!("Missing path parameter: {name}")))?;
    raw.parse::<i64>()
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| bad_request(format!("Invalid {name}: must be a positive integer")))
}

macro_rules! define_i64_extractor {
    ($name:ident, $param:literal) => {
        // 从路径中提取并校验对应的 i64 参数
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                match parse_i64_param(req, $param) {
                    Ok(v) => ok($name(v)),
                    Err(e) => err(e),
                }
            }
        }
    };
}

define_i64_extractor!(SafeIDI64, "id");
define_i64_extractor!(SafeAssignmentIdI64, "assignment_id");
define_i64_extractor!(SafeStudentIdI64, "student_id");
define_i64_extractor!(SafeTeacherIdI64, "teacher_id");
define_i64_extractor!(SafeSubmissionIdI64, "submission_id");

static FILE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]{16,64}$").expect("Invalid file token regex"));

/// 从路径中提取并校验文件下载 token
#[derive(Debug, Clone)]
pub struct SafeFileToken(pub String);

impl FromRequest for SafeFileToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = match req.match_info().get("token") {
            Some(raw) => raw,
            None => return err(bad_request("Missing path parameter: token")),
        };
        if FILE_TOKEN_RE.is_match(raw) {
            ok(SafeFileToken(raw.to_string()))
        } else {
            err(bad_request("Invalid file token format"))
        }
    }
}
