pub mod guardians;
pub mod streams;
pub mod students;
pub mod subjects;
pub mod teaching;
pub mod terms;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::teaching::{
    AssignTeachingRequest, CreateStreamRequest, CreateSubjectRequest, CreateTermRequest,
    EnrollStudentRequest, LinkGuardianRequest,
};
use crate::storage::Storage;

// 教务管理（学级 / 科目 / 学期 / 学籍 / 授课 / 监护），除授课记录查询外仅管理员可用
pub struct AcademicsService {
    storage: Option<Arc<dyn Storage>>,
}

impl AcademicsService {
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

    pub async fn create_stream(
        &self,
        create_request: CreateStreamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        streams::handle_create_stream(self, create_request, request).await
    }

    pub async fn list_streams(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        streams::handle_list_streams(self, request).await
    }

    pub async fn create_subject(
        &self,
        create_request: CreateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        subjects::handle_create_subject(self, create_request, request).await
    }

    pub async fn list_subjects(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        subjects::handle_list_subjects(self, request).await
    }

    pub async fn create_term(
        &self,
        create_request: CreateTermRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        terms::handle_create_term(self, create_request, request).await
    }

    pub async fn list_terms(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        terms::handle_list_terms(self, request).await
    }

    pub async fn enroll_student(
        &self,
        enroll_request: EnrollStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        students::handle_enroll_student(self, enroll_request, request).await
    }

    pub async fn assign_teaching(
        &self,
        assign_request: AssignTeachingRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        teaching::handle_assign_teaching(self, assign_request, request).await
    }

    pub async fn list_teaching(
        &self,
        teacher_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        teaching::handle_list_teaching(self, teacher_id, request).await
    }

    pub async fn link_guardian(
        &self,
        link_request: LinkGuardianRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        guardians::handle_link_guardian(self, link_request, request).await
    }
}
