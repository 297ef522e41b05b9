use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::submissions::{list_submissions, start_submission, submit_submission};
use crate::middlewares;
use crate::models::assignments::requests::{AssignmentListQuery, CreateAssignmentRequest};
use crate::models::users::entities::UserRole;
use crate::services::AssignmentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// 发布作业
pub async fn create_assignment(
    req: HttpRequest,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.create(body.into_inner(), &req).await
}

// 教师视角的作业列表
pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<AssignmentListQuery>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.list(query.into_inner(), &req).await
}

// 学生视角的作业列表（附带本人提交状态）
pub async fn list_my_assignments(
    req: HttpRequest,
    query: web::Query<AssignmentListQuery>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_mine(query.into_inner(), &req)
        .await
}

// 作业详情
pub async fn get_assignment(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.detail(path.0, &req).await
}

// 停用作业
pub async fn deactivate_assignment(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.deactivate(path.0, &req).await
}

// 配置路由（作业及其下挂的提交入口共用一个 scope）
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出本人发布的作业 - 仅教师和管理员
                    .route(
                        web::get()
                            .to(list_assignments)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    // 发布作业 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            // 本班作业列表 - 仅学生
            .service(
                web::resource("/student")
                    .route(web::get().to(list_my_assignments))
                    .wrap(middlewares::RequireRole::new(&UserRole::Student)),
            )
            // 作业详情 - 所有登录用户可访问（业务层按角色校验可见性）
            .service(web::resource("/{id}").route(web::get().to(get_assignment)))
            // 停用作业 - 仅教师和管理员
            .service(
                web::resource("/{id}/deactivate")
                    .route(web::post().to(deactivate_assignment))
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
            )
            // 提交作业 - 仅学生
            .service(
                web::resource("/{assignment_id}/submit")
                    .route(web::post().to(submit_submission))
                    .wrap(middlewares::RequireRole::new(&UserRole::Student)),
            )
            // 标记开始作业 - 仅学生
            .service(
                web::resource("/{assignment_id}/submission/start")
                    .route(web::post().to(start_submission))
                    .wrap(middlewares::RequireRole::new(&UserRole::Student)),
            )
            // 列出本作业全部提交 - 仅教师和管理员
            .service(
                web::resource("/{assignment_id}/submissions")
                    .route(web::get().to(list_submissions))
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
            ),
    );
}
