//! 教务数据存储：学级、科目、学籍、授课、监护

use super::SeaOrmStorage;
use crate::entity::{
    guardian_links, streams, student_profiles, subjects, teaching_assignments, terms,
};
use crate::errors::{ClassworkError, Result};
use crate::models::teaching::{
    AssignTeachingRequest, CreateTermRequest, EnrollStudentRequest, GuardianLink,
    LinkGuardianRequest, Stream, Subject, TeachingAssignment, Term,
};
use crate::models::users::entities::StudentProfile;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建学级
    pub async fn create_stream_impl(
        &self,
        name: &str,
        description: Option<String>,
    ) -> Result<Stream> {
        let now = chrono::Utc::now().timestamp();

        let model = streams::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("创建学级失败: {e}")))?;

        Ok(result.into_stream())
    }

    /// 通过名称获取学级
    pub async fn get_stream_by_name_impl(&self, name: &str) -> Result<Option<Stream>> {
        let result = streams::Entity::find()
            .filter(streams::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询学级失败: {e}")))?;

        Ok(result.map(|m| m.into_stream()))
    }

    /// 通过 ID 获取学级
    pub async fn get_stream_by_id_impl(&self, id: i64) -> Result<Option<Stream>> {
        let result = streams::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询学级失败: {e}")))?;

        Ok(result.map(|m| m.into_stream()))
    }

    /// 列出全部学级
    pub async fn list_streams_impl(&self) -> Result<Vec<Stream>> {
        let result = streams::Entity::find()
            .order_by_asc(streams::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询学级列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_stream()).collect())
    }

    /// 创建科目
    pub async fn create_subject_impl(&self, name: &str) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = subjects::ActiveModel {
            name: Set(name.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    /// 通过名称获取科目
    pub async fn get_subject_by_name_impl(&self, name: &str) -> Result<Option<Subject>> {
        let result = subjects::Entity::find()
            .filter(subjects::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 通过 ID 获取科目
    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = subjects::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 列出全部科目
    pub async fn list_subjects_impl(&self) -> Result<Vec<Subject>> {
        let result = subjects::Entity::find()
            .order_by_asc(subjects::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_subject()).collect())
    }

    /// 创建学期
    pub async fn create_term_impl(&self, req: CreateTermRequest) -> Result<Term> {
        let now = chrono::Utc::now().timestamp();

        // 新学期标记为当期时，取消其余学期的当期标记
        if req.is_current {
            terms::Entity::update_many()
                .col_expr(terms::Column::IsCurrent, Expr::value(false))
                .col_expr(terms::Column::UpdatedAt, Expr::value(now))
                .filter(terms::Column::IsCurrent.eq(true))
                .exec(&self.db)
                .await
                .map_err(|e| {
                    ClassworkError::database_operation(format!("更新当期学期失败: {e}"))
                })?;
        }

        let model = terms::ActiveModel {
            name: Set(req.name),
            starts_on: Set(req.starts_on.timestamp()),
            ends_on: Set(req.ends_on.timestamp()),
            is_current: Set(req.is_current),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("创建学期失败: {e}")))?;

        Ok(result.into_term())
    }

    /// 列出全部学期
    pub async fn list_terms_impl(&self) -> Result<Vec<Term>> {
        let result = terms::Entity::find()
            .order_by_desc(terms::Column::StartsOn)
            .all(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询学期列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_term()).collect())
    }

    /// 学生入级
    pub async fn enroll_student_impl(&self, req: EnrollStudentRequest) -> Result<StudentProfile> {
        let now = chrono::Utc::now().timestamp();

        let admission_number = match req.admission_number {
            Some(number) => number,
            // 未指定学籍号时按用户 ID 生成
            None => format!("ADM-{:06}", req.user_id),
        };

        let model = student_profiles::ActiveModel {
            user_id: Set(req.user_id),
            stream_id: Set(req.stream_id),
            admission_number: Set(admission_number),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("学生入级失败: {e}")))?;

        Ok(result.into_student_profile())
    }

    /// 通过档案 ID 获取学生
    pub async fn get_student_profile_by_id_impl(&self, id: i64) -> Result<Option<StudentProfile>> {
        let result = student_profiles::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询学生档案失败: {e}")))?;

        Ok(result.map(|m| m.into_student_profile()))
    }

    /// 通过用户 ID 获取学生档案
    pub async fn get_student_profile_by_user_id_impl(
        &self,
        user_id: i64,
    ) -> Result<Option<StudentProfile>> {
        let result = student_profiles::Entity::find()
            .filter(student_profiles::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询学生档案失败: {e}")))?;

        Ok(result.map(|m| m.into_student_profile()))
    }

    /// 授课分配
    pub async fn assign_teaching_impl(
        &self,
        req: AssignTeachingRequest,
    ) -> Result<TeachingAssignment> {
        let now = chrono::Utc::now().timestamp();

        let model = teaching_assignments::ActiveModel {
            teacher_id: Set(req.teacher_id),
            subject_id: Set(req.subject_id),
            stream_id: Set(req.stream_id),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("授课分配失败: {e}")))?;

        Ok(result.into_teaching_assignment())
    }

    /// 列出某教师的全部授课对
    pub async fn list_teaching_for_teacher_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TeachingAssignment>> {
        let result = teaching_assignments::Entity::find()
            .filter(teaching_assignments::Column::TeacherId.eq(teacher_id))
            .all(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询授课记录失败: {e}")))?;

        Ok(result
            .into_iter()
            .map(|m| m.into_teaching_assignment())
            .collect())
    }

    /// 家长绑定学生
    pub async fn link_guardian_impl(&self, req: LinkGuardianRequest) -> Result<GuardianLink> {
        let now = chrono::Utc::now().timestamp();

        let model = guardian_links::ActiveModel {
            parent_id: Set(req.parent_id),
            student_id: Set(req.student_id),
            relationship: Set(req.relationship.unwrap_or_else(|| "guardian".to_string())),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("监护绑定失败: {e}")))?;

        Ok(result.into_guardian_link())
    }

    /// 列出某家长绑定的全部学生档案
    pub async fn list_children_of_parent_impl(
        &self,
        parent_id: i64,
    ) -> Result<Vec<StudentProfile>> {
        let links = guardian_links::Entity::find()
            .filter(guardian_links::Column::ParentId.eq(parent_id))
            .all(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询监护关系失败: {e}")))?;

        if links.is_empty() {
            return Ok(Vec::new());
        }

        let student_ids: Vec<i64> = links.iter().map(|l| l.student_id).collect();
        let profiles = student_profiles::Entity::find()
            .filter(student_profiles::Column::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("查询学生档案失败: {e}")))?;

        Ok(profiles
            .into_iter()
            .map(|m| m.into_student_profile())
            .collect())
    }
}
