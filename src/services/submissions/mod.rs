pub mod detail;
pub mod grade;
pub mod list;
pub mod start;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::{GradeRequest, SubmitRequest};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
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

    // 学生标记开始作业
    pub async fn start(
        &self,
        assignment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        start::handle_start(self, assignment_id, request).await
    }

    // 学生提交作业
    pub async fn submit(
        &self,
        assignment_id: i64,
        submit_request: SubmitRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::handle_submit(self, assignment_id, submit_request, request).await
    }

    // 教师评分
    pub async fn grade(
        &self,
        submission_id: i64,
        grade_request: GradeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        grade::handle_grade(self, submission_id, grade_request, request).await
    }

    // 提交详情
    pub async fn detail(
        &self,
        submission_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::handle_detail(self, submission_id, request).await
    }

    // 某作业下的全部提交（教师）
    pub async fn list_for_assignment(
        &self,
        assignment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_for_assignment(self, assignment_id, request).await
    }
}
