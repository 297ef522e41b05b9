use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::teaching::requests::{
    AssignTeachingRequest, CreateStreamRequest, CreateSubjectRequest, CreateTermRequest,
    EnrollStudentRequest, LinkGuardianRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AcademicsService;
use crate::utils::SafeTeacherIdI64;

// 懒加载的全局 AcademicsService 实例
static ACADEMICS_SERVICE: Lazy<AcademicsService> = Lazy::new(AcademicsService::new_lazy);

pub async fn create_stream(
    req: HttpRequest,
    body: web::Json<CreateStreamRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMICS_SERVICE
        .create_stream(body.into_inner(), &req)
        .await
}

pub async fn list_streams(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACADEMICS_SERVICE.list_streams(&req).await
}

pub async fn create_subject(
    req: HttpRequest,
    body: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMICS_SERVICE
        .create_subject(body.into_inner(), &req)
        .await
}

pub async fn list_subjects(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACADEMICS_SERVICE.list_subjects(&req).await
}

pub async fn create_term(
    req: HttpRequest,
    body: web::Json<CreateTermRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMICS_SERVICE.create_term(body.into_inner(), &req).await
}

pub async fn list_terms(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACADEMICS_SERVICE.list_terms(&req).await
}

pub async fn enroll_student(
    req: HttpRequest,
    body: web::Json<EnrollStudentRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMICS_SERVICE
        .enroll_student(body.into_inner(), &req)
        .await
}

pub async fn assign_teaching(
    req: HttpRequest,
    body: web::Json<AssignTeachingRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMICS_SERVICE
        .assign_teaching(body.into_inner(), &req)
        .await
}

pub async fn link_guardian(
    req: HttpRequest,
    body: web::Json<LinkGuardianRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMICS_SERVICE
        .link_guardian(body.into_inner(), &req)
        .await
}

pub async fn list_teaching(req: HttpRequest, path: SafeTeacherIdI64) -> ActixResult<HttpResponse> {
    ACADEMICS_SERVICE.list_teaching(path.0, &req).await
}

// 配置路由（教务数据维护，除授课记录查询外仅管理员）
pub fn configure_academics_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/academics")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/streams")
                    .route(web::post().to(create_stream))
                    .route(web::get().to(list_streams))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            )
            .service(
                web::resource("/subjects")
                    .route(web::post().to(create_subject))
                    .route(web::get().to(list_subjects))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            )
            .service(
                web::resource("/terms")
                    .route(web::post().to(create_term))
                    .route(web::get().to(list_terms))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            )
            .service(
                web::resource("/students")
                    .route(web::post().to(enroll_student))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            )
            .service(
                web::resource("/teaching")
                    .route(web::post().to(assign_teaching))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            )
            // 授课记录查询 - 管理员与教师（业务层限制教师只能查本人）
            .service(
                web::resource("/teaching/{teacher_id}")
                    .route(web::get().to(list_teaching))
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
            )
            .service(
                web::resource("/guardians")
                    .route(web::post().to(link_guardian))
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
            ),
    );
}
