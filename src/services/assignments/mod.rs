pub mod create;
pub mod deactivate;
pub mod detail;
pub mod list;
pub mod list_mine;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::requests::{AssignmentListQuery, CreateAssignmentRequest};
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 发布作业（教师）
    pub async fn create(
        &self,
        create_request: CreateAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create(self, create_request, request).await
    }

    // 教师视角的作业列表
    pub async fn list(
        &self,
        query: AssignmentListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list(self, query, request).await
    }

    // 学生视角的作业列表（附带本人提交状态）
    pub async fn list_mine(
        &self,
        query: AssignmentListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list_mine::handle_list_mine(self, query, request).await
    }

    // 作业详情
    pub async fn detail(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        detail::handle_detail(self, id, request).await
    }

    // 停用作业
    pub async fn deactivate(&self, id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        deactivate::handle_deactivate(self, id, request).await
    }
}
