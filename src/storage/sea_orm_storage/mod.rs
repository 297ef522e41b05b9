//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod academics;
mod assignments;
mod files;
mod submissions;
mod users;

use crate::config::AppConfig;
use crate::errors::{ClassworkError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ClassworkError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ClassworkError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ClassworkError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ClassworkError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ClassworkError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 教务模块
    async fn create_stream(&self, name: &str, description: Option<String>) -> Result<Stream> {
        self.create_stream_impl(name, description).await
    }

    async fn get_stream_by_name(&self, name: &str) -> Result<Option<Stream>> {
        self.get_stream_by_name_impl(name).await
    }

    async fn get_stream_by_id(&self, id: i64) -> Result<Option<Stream>> {
        self.get_stream_by_id_impl(id).await
    }

    async fn list_streams(&self) -> Result<Vec<Stream>> {
        self.list_streams_impl().await
    }

    async fn create_subject(&self, name: &str) -> Result<Subject> {
        self.create_subject_impl(name).await
    }

    async fn get_subject_by_name(&self, name: &str) -> Result<Option<Subject>> {
        self.get_subject_by_name_impl(name).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    async fn create_term(&self, req: CreateTermRequest) -> Result<Term> {
        self.create_term_impl(req).await
    }

    async fn list_terms(&self) -> Result<Vec<Term>> {
        self.list_terms_impl().await
    }

    async fn enroll_student(&self, req: EnrollStudentRequest) -> Result<StudentProfile> {
        self.enroll_student_impl(req).await
    }

    async fn get_student_profile_by_id(&self, id: i64) -> Result<Option<StudentProfile>> {
        self.get_student_profile_by_id_impl(id).await
    }

    async fn get_student_profile_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Option<StudentProfile>> {
        self.get_student_profile_by_user_id_impl(user_id).await
    }

    async fn assign_teaching(&self, req: AssignTeachingRequest) -> Result<TeachingAssignment> {
        self.assign_teaching_impl(req).await
    }

    async fn list_teaching_for_teacher(&self, teacher_id: i64) -> Result<Vec<TeachingAssignment>> {
        self.list_teaching_for_teacher_impl(teacher_id).await
    }

    async fn link_guardian(&self, req: LinkGuardianRequest) -> Result<GuardianLink> {
        self.link_guardian_impl(req).await
    }

    async fn list_children_of_parent(&self, parent_id: i64) -> Result<Vec<StudentProfile>> {
        self.list_children_of_parent_impl(parent_id).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(created_by, req).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
        created_by: Option<i64>,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(query, created_by)
            .await
    }

    async fn list_stream_assignments(
        &self,
        stream_id: i64,
        student_id: i64,
        query: AssignmentListQuery,
    ) -> Result<(Vec<(Assignment, Option<Submission>)>, u64)> {
        self.list_stream_assignments_impl(stream_id, student_id, query)
            .await
    }

    async fn deactivate_assignment(&self, id: i64) -> Result<bool> {
        self.deactivate_assignment_impl(id).await
    }

    // 提交模块
    async fn get_or_create_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Submission> {
        self.get_or_create_submission_impl(assignment_id, student_id)
            .await
    }

    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(id).await
    }

    async fn start_submission(&self, assignment_id: i64, student_id: i64) -> Result<Submission> {
        self.start_submission_impl(assignment_id, student_id).await
    }

    async fn submit_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        text: Option<String>,
        file_token: Option<String>,
        status: SubmissionStatus,
        submitted_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Option<Submission>> {
        self.submit_submission_impl(assignment_id, student_id, text, file_token, status, submitted_at)
            .await
    }

    async fn grade_submission(
        &self,
        submission_id: i64,
        graded_by: i64,
        marks_obtained: f64,
        remarks: Option<String>,
    ) -> Result<Option<Submission>> {
        self.grade_submission_impl(submission_id, graded_by, marks_obtained, remarks)
            .await
    }

    async fn list_submissions_for_assignment(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        self.list_submissions_for_assignment_impl(assignment_id)
            .await
    }


    // 文件模块
    async fn upload_file(
        &self,
        token: &str,
        file_name: &str,
        file_size: i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<File> {
        self.upload_file_impl(token, file_name, file_size, file_type, user_id)
            .await
    }

    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>> {
        self.get_file_by_token_impl(token).await
    }
}
