use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::submissions;
use crate::errors::{ClassworkError, Result};
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    submissions::entities::Submission,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 发布作业
    pub async fn create_assignment_impl(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description.unwrap_or_default()),
            kind: Set(req.kind.to_string()),
            subject_id: Set(req.subject_id),
            stream_id: Set(req.stream_id),
            term_id: Set(req.term_id),
            created_by: Set(created_by),
            file_token: Set(req.file_token),
            total_marks: Set(req.total_marks),
            due_date: Set(req.due_date.timestamp()),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("发布作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 教师视角分页列出作业
    pub async fn list_assignments_with_pagination_impl(
        &self,
        query: AssignmentListQuery,
        created_by: Option<i64>,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1);
        let size = query.size.unwrap_or(10).clamp(1, 100);

        let mut select = Assignments::find();

        if let Some(creator) = created_by {
            select = select.filter(Column::CreatedBy.eq(creator));
        }
        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }
        if let Some(stream_id) = query.stream_id {
            select = select.filter(Column::StreamId.eq(stream_id));
        }
        if let Some(kind) = query.kind {
            select = select.filter(Column::Kind.eq(kind.to_string()));
        }
        // 不指定时列出全部状态，教师能看到自己已停用的作业
        if let Some(active) = query.is_active {
            select = select.filter(Column::IsActive.eq(active));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询作业总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询作业页数失败: {e}")))?;
        let assignments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(AssignmentListResponse {
            items: assignments
                .into_iter()
                .map(|m| m.into_assignment())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 学生视角：某学级的有效作业，按截止时间升序，附带该学生的提交记录
    pub async fn list_stream_assignments_impl(
        &self,
        stream_id: i64,
        student_id: i64,
        query: AssignmentListQuery,
    ) -> Result<(Vec<(Assignment, Option<Submission>)>, u64)> {
        let page = query.page.unwrap_or(1).max(1);
        let size = query.size.unwrap_or(10).clamp(1, 100);

        let mut select = Assignments::find()
            .filter(Column::StreamId.eq(stream_id))
            .filter(Column::IsActive.eq(true));

        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }
        if let Some(kind) = query.kind {
            select = select.filter(Column::Kind.eq(kind.to_string()));
        }

        // 最紧迫的截止时间排在最前
        select = select.order_by_asc(Column::DueDate);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询作业总数失败: {e}")))?;
        let assignments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询作业列表失败: {e}")))?;

        if assignments.is_empty() {
            return Ok((Vec::new(), total));
        }

        // 一次性取回该学生在本页作业下的提交记录
        let assignment_ids: Vec<i64> = assignments.iter().map(|m| m.id).collect();
        let submission_models = submissions::Entity::find()
            .filter(submissions::Column::AssignmentId.is_in(assignment_ids))
            .filter(submissions::Column::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询提交记录失败: {e}")))?;

        let mut by_assignment: std::collections::HashMap<i64, Submission> = submission_models
            .into_iter()
            .map(|m| (m.assignment_id, m.into_submission()))
            .collect();

        let items = assignments
            .into_iter()
            .map(|m| {
                let submission = by_assignment.remove(&m.id);
                (m.into_assignment(), submission)
            })
            .collect();

        Ok((items, total))
    }

    /// 停用作业（保留历史提交，不做物理删除）
    pub async fn deactivate_assignment_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Assignments::update_many()
            .col_expr(Column::IsActive, sea_orm::sea_query::Expr::value(false))
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .filter(Column::IsActive.eq(true))
            .exec(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("停用作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
