use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, PaginationInfo,
    assignments::{
        requests::AssignmentListQuery,
        responses::{StudentAssignmentItem, StudentAssignmentListResponse},
    },
    submissions::status::SubmissionStatus,
};
use crate::services::error_code_response;

use super::AssignmentService;

// 学生视角：本学级的有效作业，按截止时间升序，附带本人提交状态
pub async fn handle_list_mine(
    service: &AssignmentService,
    query: AssignmentListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(error_code_response(
            ErrorCode::Unauthorized,
            "Authentication required",
        ));
    };

    let profile = match storage.get_student_profile_by_user_id(user.id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return Ok(error_code_response(
                ErrorCode::StudentNotFound,
                "No student profile for this account",
            ));
        }
        Err(e) => {
            return Ok(error_code_response(
                ErrorCode::InternalServerError,
                format!("Failed to load student profile: {e}"),
            ));
        }
    };

    let page = query.page.unwrap_or(1).max(1);
    let size = query.size.unwrap_or(10).clamp(1, 100);

    match storage
        .list_stream_assignments(profile.stream_id, profile.id, query)
        .await
    {
        Ok((items, total)) => {
            let now = chrono::Utc::now();
            let items: Vec<StudentAssignmentItem> = items
                .into_iter()
                .map(|(assignment, submission)| {
                    let submission_status = submission
                        .map(|s| s.status)
                        .unwrap_or(SubmissionStatus::NotStarted);
                    let overdue = assignment.is_overdue(now);
                    let days_remaining = assignment.days_remaining(now);
                    StudentAssignmentItem {
                        assignment,
                        submission_status,
                        overdue,
                        days_remaining,
                    }
                })
                .collect();

            let total_pages = total.div_ceil(size);
            let response = StudentAssignmentListResponse {
                items,
                pagination: PaginationInfo {
                    page: page as i64,
                    page_size: size as i64,
                    total: total as i64,
                    total_pages: total_pages as i64,
                },
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "OK")))
        }
        Err(e) => Ok(error_code_response(
            ErrorCode::InternalServerError,
            format!("Failed to list assignments: {e}"),
        )),
    }
}
