use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::submissions::requests::{GradeRequest, SubmitRequest};
use crate::models::users::entities::UserRole;
use crate::services::SubmissionService;
use crate::utils::{SafeAssignmentIdI64, SafeSubmissionIdI64};

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 学生标记开始作业
pub async fn start_submission(
    req: HttpRequest,
    path: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.start(path.0, &req).await
}

// 学生提交作业
pub async fn submit_submission(
    req: HttpRequest,
    path: SafeAssignmentIdI64,
    body: web::Json<SubmitRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .submit(path.0, body.into_inner(), &req)
        .await
}

// 某作业下的全部提交
pub async fn list_submissions(
    req: HttpRequest,
    path: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.list_for_assignment(path.0, &req).await
}

// 提交详情
pub async fn get_submission(
    req: HttpRequest,
    path: SafeSubmissionIdI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.detail(path.0, &req).await
}

// 教师评分
pub async fn grade_submission(
    req: HttpRequest,
    path: SafeSubmissionIdI64,
    body: web::Json<GradeRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .grade(path.0, body.into_inner(), &req)
        .await
}

// 配置路由（作业下挂的提交入口随作业路由一起注册）
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/submissions")
            .wrap(middlewares::RequireJWT)
            // 提交详情 - 所有登录用户可访问（业务层按角色校验可见性）
            .service(web::resource("/{submission_id}").route(web::get().to(get_submission)))
            // 评分 - 仅教师和管理员
            .service(
                web::resource("/{submission_id}/grade")
                    .route(web::post().to(grade_submission))
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
            ),
    );
}
