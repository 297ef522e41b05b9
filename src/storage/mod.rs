use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    files::entities::File,
    submissions::{entities::Submission, status::SubmissionStatus},
    teaching::{
        AssignTeachingRequest, CreateTermRequest, EnrollStudentRequest, GuardianLink,
        LinkGuardianRequest, Stream, Subject, TeachingAssignment, Term,
    },
    users::{
        entities::{StudentProfile, User},
        requests::CreateUserRequest,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段此时已是哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量（启动时判断是否需要初始管理员）
    async fn count_users(&self) -> Result<u64>;

    /// 教务数据管理方法
    // 创建学级
    async fn create_stream(&self, name: &str, description: Option<String>) -> Result<Stream>;
    // 通过名称获取学级
    async fn get_stream_by_name(&self, name: &str) -> Result<Option<Stream>>;
    // 通过ID获取学级
    async fn get_stream_by_id(&self, id: i64) -> Result<Option<Stream>>;
    // 列出全部学级
    async fn list_streams(&self) -> Result<Vec<Stream>>;
    // 创建科目
    async fn create_subject(&self, name: &str) -> Result<Subject>;
    // 通过名称获取科目
    async fn get_subject_by_name(&self, name: &str) -> Result<Option<Subject>>;
    // 通过ID获取科目
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    // 列出全部科目
    async fn list_subjects(&self) -> Result<Vec<Subject>>;
    // 创建学期（标记当期时取消其他学期的当期标记）
    async fn create_term(&self, req: CreateTermRequest) -> Result<Term>;
    // 列出全部学期
    async fn list_terms(&self) -> Result<Vec<Term>>;
    // 学生入级
    async fn enroll_student(&self, req: EnrollStudentRequest) -> Result<StudentProfile>;
    // 通过档案ID获取学生
    async fn get_student_profile_by_id(&self, id: i64) -> Result<Option<StudentProfile>>;
    // 通过用户ID获取学生档案
    async fn get_student_profile_by_user_id(&self, user_id: i64)
    -> Result<Option<StudentProfile>>;
    // 授课分配
    async fn assign_teaching(&self, req: AssignTeachingRequest) -> Result<TeachingAssignment>;
    // 列出某教师的全部授课对
    async fn list_teaching_for_teacher(&self, teacher_id: i64) -> Result<Vec<TeachingAssignment>>;
    // 家长绑定学生
    async fn link_guardian(&self, req: LinkGuardianRequest) -> Result<GuardianLink>;
    // 列出某家长绑定的全部学生档案
    async fn list_children_of_parent(&self, parent_id: i64) -> Result<Vec<StudentProfile>>;

    /// 作业管理方法
    // 发布作业
    async fn create_assignment(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 教师视角分页列出作业
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
        created_by: Option<i64>,
    ) -> Result<AssignmentListResponse>;
    // 学生视角：某学级的有效作业，按截止时间升序，附带该学生的提交记录
    async fn list_stream_assignments(
        &self,
        stream_id: i64,
        student_id: i64,
        query: AssignmentListQuery,
    ) -> Result<(Vec<(Assignment, Option<Submission>)>, u64)>;
    // 停用作业
    async fn deactivate_assignment(&self, id: i64) -> Result<bool>;

    /// 提交管理方法
    // 获取或创建提交记录（幂等，初始状态 NOT_STARTED）
    async fn get_or_create_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    // 标记开始作业：仅当当前状态为 NOT_STARTED 时生效
    async fn start_submission(&self, assignment_id: i64, student_id: i64) -> Result<Submission>;
    // 提交内容：已评分的记录拒绝覆盖，
    // 返回 None 表示状态前置条件不满足
    async fn submit_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        text: Option<String>,
        file_token: Option<String>,
        status: SubmissionStatus,
        submitted_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Option<Submission>>;
    // 评分：仅当当前状态为 SUBMITTED / LATE 时生效，
    // 返回 None 表示状态前置条件不满足（并发评分时只有一个成功）
    async fn grade_submission(
        &self,
        submission_id: i64,
        graded_by: i64,
        marks_obtained: f64,
        remarks: Option<String>,
    ) -> Result<Option<Submission>>;
    // 列出某作业下的全部提交
    async fn list_submissions_for_assignment(&self, assignment_id: i64)
    -> Result<Vec<Submission>>;

    /// 文件管理方法
    // 登记上传文件
    async fn upload_file(
        &self,
        token: &str,
        file_name: &str,
        file_size: i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<File>;
    // 通过唯一 token 获取文件信息
    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
