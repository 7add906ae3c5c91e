use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 创建学生（password 字段此时已是哈希值）
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过邮箱获取学生（登录用）
    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListParams,
    ) -> Result<StudentListResponse>;
    // 更新学生
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;
    // 统计学生数量（种子判断用）
    async fn count_students(&self) -> Result<u64>;

    /// 教师管理方法
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListParams,
    ) -> Result<TeacherListResponse>;
    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, id: i64) -> Result<bool>;
    // 教师是否被科目/选课/评价引用（删除前检查）
    async fn teacher_has_references(&self, id: i64) -> Result<bool>;

    /// 科目管理方法
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListParams,
    ) -> Result<SubjectListResponse>;
    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;
    async fn subject_has_references(&self, id: i64) -> Result<bool>;

    /// 学段与班组
    async fn list_levels(&self) -> Result<Vec<Level>>;
    async fn list_sections(&self) -> Result<Vec<Section>>;
    async fn get_level_by_id(&self, id: i64) -> Result<Option<Level>>;
    async fn count_levels(&self) -> Result<u64>;
    async fn create_level(&self, level_name: &str) -> Result<Level>;
    async fn create_section(&self, level_id: i64, section_name: &str) -> Result<Section>;

    /// 问卷维度与题目
    async fn list_criteria(&self) -> Result<Vec<Criterion>>;
    async fn list_questions(&self, only_active: bool) -> Result<Vec<Question>>;
    async fn create_criterion(&self, req: CreateCriterionRequest) -> Result<Criterion>;
    async fn create_question(&self, req: CreateQuestionRequest) -> Result<Question>;
    async fn update_question(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>>;
    async fn delete_question(&self, id: i64) -> Result<bool>;

    /// 选课管理方法
    // 创建选课（teacher_id 已由调用方从科目冗余取出）
    async fn create_enrollment(
        &self,
        student_id: i64,
        subject_id: i64,
        teacher_id: i64,
    ) -> Result<Enrollment>;
    // 精确三元组选课是否存在
    async fn exists_enrollment(
        &self,
        student_id: i64,
        teacher_id: i64,
        subject_id: i64,
    ) -> Result<bool>;
    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListParams,
    ) -> Result<EnrollmentListResponse>;
    async fn delete_enrollment(&self, id: i64) -> Result<bool>;
    // 在读且教师在职的选课，带展示名（资格解析的输入）
    async fn list_active_enrollment_pairs(&self, student_id: i64) -> Result<Vec<EligiblePair>>;
    // 已评价过的 (teacher_id, subject_id) 组合
    async fn list_evaluated_pairs(&self, student_id: i64) -> Result<Vec<(i64, i64)>>;

    /// 评价管理方法
    // 指定时间戳之后是否已有评价（None = 全时段）
    async fn exists_evaluation_since(
        &self,
        student_id: i64,
        teacher_id: i64,
        subject_id: i64,
        since: Option<i64>,
    ) -> Result<bool>;
    // 评价 + 全部得分在同一事务内落库
    async fn create_evaluation_with_scores(&self, new: NewEvaluation) -> Result<Evaluation>;
    async fn get_scores_for_evaluation(&self, evaluation_id: i64) -> Result<Vec<Score>>;
    // 列表带真实姓名，匿名遮蔽由服务层按调用者角色处理
    async fn list_evaluations_with_pagination(
        &self,
        query: EvaluationListParams,
        student_id: Option<i64>,
    ) -> Result<EvaluationListResponse>;
    // 评价 + 展示名（详情页）
    async fn get_evaluation_display(
        &self,
        id: i64,
    ) -> Result<Option<(Evaluation, String, String, String)>>;
    // 两步删除：先删得分再删评价，同一事务
    async fn delete_evaluation_with_scores(&self, id: i64) -> Result<bool>;
    // 教师全部得分行 (question_id, score_value)，可按科目过滤；同时返回评价数
    async fn teacher_score_rows(
        &self,
        teacher_id: i64,
        subject_id: Option<i64>,
    ) -> Result<(i64, Vec<(i64, i32)>)>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
