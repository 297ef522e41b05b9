use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::ParentService;
use crate::utils::SafeStudentIdI64;

// 懒加载的全局 ParentService 实例
static PARENT_SERVICE: Lazy<ParentService> = Lazy::new(ParentService::new_lazy);

// 列出本人绑定的子女
pub async fn list_children(request: HttpRequest) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.children(&request).await
}

// 查看某个子女的作业与提交情况
pub async fn child_assignments(
    request: HttpRequest,
    path: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    PARENT_SERVICE.child_assignments(path.0, &request).await
}

// 配置路由
pub fn configure_parents_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/parents")
            .wrap(middlewares::RequireRole::new_any(UserRole::parent_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/children", web::get().to(list_children))
            .route(
                "/children/{student_id}/assignments",
                web::get().to(child_assignments),
            ),
    );
}
