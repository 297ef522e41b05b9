//! 提交记录存储
//!
//! 提交与评分都用带状态前置条件的条件 UPDATE 实现，
//! 并发请求落到数据库层面只会有一个生效，不需要显式加锁。

use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{ClassworkError, Result};
use crate::models::submissions::{entities::Submission, status::SubmissionStatus};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 获取或创建提交记录（幂等，初始状态 NOT_STARTED）
    pub async fn get_or_create_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Submission> {
        if let Some(existing) = self
            .get_submission_by_pair_impl(assignment_id, student_id)
            .await?
        {
            return Ok(existing);
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            assignment_id: Set(assignment_id),
            student_id: Set(student_id),
            status: Set(SubmissionStatus::NotStarted.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(result) => Ok(result.into_submission()),
            // 并发创建触发唯一约束时取回已有记录
            Err(_) => self
                .get_submission_by_pair_impl(assignment_id, student_id)
                .await?
                .ok_or_else(|| {
                    ClassworkError::database_operation("创建提交记录失败".to_string())
                }),
        }
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 通过（作业, 学生）获取提交
    pub async fn get_submission_by_pair_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 标记开始作业：仅当当前状态为 NOT_STARTED 时写入 IN_PROGRESS。
    /// 已经开始或已提交时原样返回当前记录（幂等）。
    pub async fn start_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Submission> {
        let submission = self
            .get_or_create_submission_impl(assignment_id, student_id)
            .await?;

        let now = chrono::Utc::now().timestamp();
        Submissions::update_many()
            .col_expr(
                Column::Status,
                Expr::value(SubmissionStatus::InProgress.to_string()),
            )
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(submission.id))
            .filter(Column::Status.eq(SubmissionStatus::NotStarted.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("标记开始失败: {e}")))?;

        self.get_submission_by_id_impl(submission.id)
            .await?
            .ok_or_else(|| ClassworkError::not_found("提交记录不存在".to_string()))
    }

    /// 提交内容：评分前可反复提交覆盖，已评分（GRADED）时返回 None。
    pub async fn submit_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
        text: Option<String>,
        file_token: Option<String>,
        status: SubmissionStatus,
        submitted_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Option<Submission>> {
        let submission = self
            .get_or_create_submission_impl(assignment_id, student_id)
            .await?;

        let now = chrono::Utc::now().timestamp();
        let result = Submissions::update_many()
            .col_expr(Column::Status, Expr::value(status.to_string()))
            .col_expr(Column::Text, Expr::value(text))
            .col_expr(Column::FileToken, Expr::value(file_token))
            .col_expr(Column::SubmittedAt, Expr::value(submitted_at.timestamp()))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(submission.id))
            .filter(Column::Status.ne(SubmissionStatus::Graded.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("提交作业失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_submission_by_id_impl(submission.id).await
    }

    /// 评分：仅当当前状态为 SUBMITTED / LATE 时生效。
    /// 并发评分时只有一个请求生效，其余拿到 None。
    pub async fn grade_submission_impl(
        &self,
        submission_id: i64,
        graded_by: i64,
        marks_obtained: f64,
        remarks: Option<String>,
    ) -> Result<Option<Submission>> {
        let now = chrono::Utc::now().timestamp();

        let result = Submissions::update_many()
            .col_expr(
                Column::Status,
                Expr::value(SubmissionStatus::Graded.to_string()),
            )
            .col_expr(Column::MarksObtained, Expr::value(marks_obtained))
            .col_expr(Column::Remarks, Expr::value(remarks))
            .col_expr(Column::GradedBy, Expr::value(graded_by))
            .col_expr(Column::GradedAt, Expr::value(now))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(submission_id))
            .filter(Column::Status.is_in([
                SubmissionStatus::Submitted.to_string(),
                SubmissionStatus::Late.to_string(),
            ]))
            .exec(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("评分失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_submission_by_id_impl(submission_id).await
    }

    /// 列出某作业下的全部提交
    pub async fn list_submissions_for_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        let result = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_asc(Column::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_submission()).collect())
    }
}
