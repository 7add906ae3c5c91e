//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod enrollments;
mod evaluations;
mod levels;
mod questions;
mod students;
mod subjects;
mod teachers;

use crate::config::AppConfig;
use crate::errors::{Result, TevalError};
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
            .map_err(|e| TevalError::database_operation(format!("数据库迁移失败: {e}")))?;

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
            .map_err(|e| TevalError::database_config(format!("SQLite URL 解析失败: {e}")))?
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
            .map_err(|e| TevalError::database_connection(format!("SQLite 连接失败: {e}")))?;

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
            .map_err(|e| TevalError::database_connection(format!("无法连接到数据库: {e}")))
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
            Err(TevalError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    enrollments::{
        entities::Enrollment,
        requests::EnrollmentListParams,
        responses::EnrollmentListResponse,
    },
    evaluations::{
        entities::{Evaluation, Score},
        requests::{EvaluationListParams, NewEvaluation},
        responses::{EligiblePair, EvaluationListResponse},
    },
    levels::entities::{Level, Section},
    questions::{
        entities::{Criterion, Question},
        requests::{CreateCriterionRequest, CreateQuestionRequest, UpdateQuestionRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListParams, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>> {
        self.get_student_by_email_impl(email).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListParams,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn count_students(&self) -> Result<u64> {
        self.count_students_impl().await
    }

    // 教师模块
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListParams,
    ) -> Result<TeacherListResponse> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    async fn teacher_has_references(&self, id: i64) -> Result<bool> {
        self.teacher_has_references_impl(id).await
    }

    // 科目模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListParams,
    ) -> Result<SubjectListResponse> {
        self.list_subjects_with_pagination_impl(query).await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    async fn subject_has_references(&self, id: i64) -> Result<bool> {
        self.subject_has_references_impl(id).await
    }

    // 学段模块
    async fn list_levels(&self) -> Result<Vec<Level>> {
        self.list_levels_impl().await
    }

    async fn list_sections(&self) -> Result<Vec<Section>> {
        self.list_sections_impl().await
    }

    async fn get_level_by_id(&self, id: i64) -> Result<Option<Level>> {
        self.get_level_by_id_impl(id).await
    }

    async fn count_levels(&self) -> Result<u64> {
        self.count_levels_impl().await
    }

    async fn create_level(&self, level_name: &str) -> Result<Level> {
        self.create_level_impl(level_name).await
    }

    async fn create_section(&self, level_id: i64, section_name: &str) -> Result<Section> {
        self.create_section_impl(level_id, section_name).await
    }

    // 问卷模块
    async fn list_criteria(&self) -> Result<Vec<Criterion>> {
        self.list_criteria_impl().await
    }

    async fn list_questions(&self, only_active: bool) -> Result<Vec<Question>> {
        self.list_questions_impl(only_active).await
    }

    async fn create_criterion(&self, req: CreateCriterionRequest) -> Result<Criterion> {
        self.create_criterion_impl(req).await
    }

    async fn create_question(&self, req: CreateQuestionRequest) -> Result<Question> {
        self.create_question_impl(req).await
    }

    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        self.update_question_impl(id, update).await
    }

    async fn delete_question(&self, id: i64) -> Result<bool> {
        self.delete_question_impl(id).await
    }

    // 选课模块
    async fn create_enrollment(
        &self,
        student_id: i64,
        subject_id: i64,
        teacher_id: i64,
    ) -> Result<Enrollment> {
        self.create_enrollment_impl(student_id, subject_id, teacher_id)
            .await
    }

    async fn exists_enrollment(
        &self,
        student_id: i64,
        teacher_id: i64,
        subject_id: i64,
    ) -> Result<bool> {
        self.exists_enrollment_impl(student_id, teacher_id, subject_id)
            .await
    }

    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListParams,
    ) -> Result<EnrollmentListResponse> {
        self.list_enrollments_with_pagination_impl(query).await
    }

    async fn delete_enrollment(&self, id: i64) -> Result<bool> {
        self.delete_enrollment_impl(id).await
    }

    async fn list_active_enrollment_pairs(&self, student_id: i64) -> Result<Vec<EligiblePair>> {
        self.list_active_enrollment_pairs_impl(student_id).await
    }

    async fn list_evaluated_pairs(&self, student_id: i64) -> Result<Vec<(i64, i64)>> {
        self.list_evaluated_pairs_impl(student_id).await
    }

    // 评价模块
    async fn exists_evaluation_since(
        &self,
        student_id: i64,
        teacher_id: i64,
        subject_id: i64,
        since: Option<i64>,
    ) -> Result<bool> {
        self.exists_evaluation_since_impl(student_id, teacher_id, subject_id, since)
            .await
    }

    async fn create_evaluation_with_scores(&self, new: NewEvaluation) -> Result<Evaluation> {
        self.create_evaluation_with_scores_impl(new).await
    }

    async fn get_scores_for_evaluation(&self, evaluation_id: i64) -> Result<Vec<Score>> {
        self.get_scores_for_evaluation_impl(evaluation_id).await
    }

    async fn list_evaluations_with_pagination(
        &self,
        query: EvaluationListParams,
        student_id: Option<i64>,
    ) -> Result<EvaluationListResponse> {
        self.list_evaluations_with_pagination_impl(query, student_id)
            .await
    }

    async fn get_evaluation_display(
        &self,
        id: i64,
    ) -> Result<Option<(Evaluation, String, String, String)>> {
        self.get_evaluation_display_impl(id).await
    }

    async fn delete_evaluation_with_scores(&self, id: i64) -> Result<bool> {
        self.delete_evaluation_with_scores_impl(id).await
    }

    async fn teacher_score_rows(
        &self,
        teacher_id: i64,
        subject_id: Option<i64>,
    ) -> Result<(i64, Vec<(i64, i32)>)> {
        self.teacher_score_rows_impl(teacher_id, subject_id).await
    }
}
