use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::entity::prelude::{Evaluations, Students, Subjects, Teachers};
use crate::errors::{Result, TevalError};
use crate::models::{
    PaginationInfo,
    enrollments::{
        entities::Enrollment,
        requests::EnrollmentListParams,
        responses::{EnrollmentListItem, EnrollmentListResponse},
    },
    evaluations::responses::EligiblePair,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建选课记录；(student_id, subject_id) 唯一索引冲突归类为 UniqueViolation
    pub async fn create_enrollment_impl(
        &self,
        student_id: i64,
        subject_id: i64,
        teacher_id: i64,
    ) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            subject_id: Set(subject_id),
            teacher_id: Set(teacher_id),
            enrolled_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(TevalError::from)?;

        Ok(result.into_enrollment())
    }

    /// 精确 (student, teacher, subject) 选课是否存在
    pub async fn exists_enrollment_impl(
        &self,
        student_id: i64,
        teacher_id: i64,
        subject_id: i64,
    ) -> Result<bool> {
        let count = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::TeacherId.eq(teacher_id))
            .filter(Column::SubjectId.eq(subject_id))
            .count(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询选课失败: {e}")))?;

        Ok(count > 0)
    }

    /// 分页列出选课，批量补齐展示名
    pub async fn list_enrollments_with_pagination_impl(
        &self,
        query: EnrollmentListParams,
    ) -> Result<EnrollmentListResponse> {
        let (page, size) = query.pagination.normalized();
        let (page, size) = (page as u64, size as u64);

        let mut select = Enrollments::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        select = select.order_by_desc(Column::EnrolledAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TevalError::database_operation(format!("查询选课总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| TevalError::database_operation(format!("查询选课页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询选课列表失败: {e}")))?;

        let student_ids: Vec<i64> = rows.iter().map(|r| r.student_id).collect();
        let subject_ids: Vec<i64> = rows.iter().map(|r| r.subject_id).collect();
        let teacher_ids: Vec<i64> = rows.iter().map(|r| r.teacher_id).collect();

        let student_names = self.student_name_map(&student_ids).await?;
        let subject_labels = self.subject_label_map(&subject_ids).await?;
        let teacher_names = self.teacher_name_map(&teacher_ids).await?;

        let items = rows
            .into_iter()
            .map(|row| {
                let student_name = student_names
                    .get(&row.student_id)
                    .cloned()
                    .unwrap_or_default();
                let subject_label = subject_labels
                    .get(&row.subject_id)
                    .cloned()
                    .unwrap_or_default();
                let teacher_name = teacher_names
                    .get(&row.teacher_id)
                    .cloned()
                    .unwrap_or_default();
                EnrollmentListItem {
                    enrollment: row.into_enrollment(),
                    student_name,
                    subject_label,
                    teacher_name,
                }
            })
            .collect();

        Ok(EnrollmentListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 删除选课
    pub async fn delete_enrollment_impl(&self, id: i64) -> Result<bool> {
        let result = Enrollments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("删除选课失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 学生的在读选课，只保留在职教师，带展示名
    pub async fn list_active_enrollment_pairs_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<EligiblePair>> {
        use crate::entity::teachers;

        let rows = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询学生选课失败: {e}")))?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let teacher_ids: Vec<i64> = rows.iter().map(|r| r.teacher_id).collect();
        let subject_ids: Vec<i64> = rows.iter().map(|r| r.subject_id).collect();

        // 只取在职教师
        let active_teachers: HashMap<i64, String> = Teachers::find()
            .filter(teachers::Column::Id.is_in(teacher_ids))
            .filter(teachers::Column::IsActive.eq(true))
            .all(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询教师失败: {e}")))?
            .into_iter()
            .map(|t| (t.id, t.full_name))
            .collect();

        let subject_labels = self.subject_label_map(&subject_ids).await?;

        let pairs = rows
            .into_iter()
            .filter_map(|row| {
                let teacher_name = active_teachers.get(&row.teacher_id)?.clone();
                let subject_label = subject_labels.get(&row.subject_id)?.clone();
                Some(EligiblePair {
                    teacher_id: row.teacher_id,
                    subject_id: row.subject_id,
                    teacher_name,
                    subject_label,
                })
            })
            .collect();

        Ok(pairs)
    }

    /// 学生已评价过的 (teacher_id, subject_id) 组合
    pub async fn list_evaluated_pairs_impl(&self, student_id: i64) -> Result<Vec<(i64, i64)>> {
        use crate::entity::evaluations;

        let rows = Evaluations::find()
            .filter(evaluations::Column::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询已评价组合失败: {e}")))?;

        Ok(rows.into_iter().map(|r| (r.teacher_id, r.subject_id)).collect())
    }

    // 批量姓名映射，列表展示共用
    pub(crate) async fn student_name_map(&self, ids: &[i64]) -> Result<HashMap<i64, String>> {
        use crate::entity::students;

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = Students::find()
            .filter(students::Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询学生姓名失败: {e}")))?;

        Ok(rows.into_iter().map(|s| (s.id, s.full_name)).collect())
    }

    pub(crate) async fn teacher_name_map(&self, ids: &[i64]) -> Result<HashMap<i64, String>> {
        use crate::entity::teachers;

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = Teachers::find()
            .filter(teachers::Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询教师姓名失败: {e}")))?;

        Ok(rows.into_iter().map(|t| (t.id, t.full_name)).collect())
    }

    pub(crate) async fn subject_label_map(&self, ids: &[i64]) -> Result<HashMap<i64, String>> {
        use crate::entity::subjects;

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = Subjects::find()
            .filter(subjects::Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询科目标签失败: {e}")))?;

        Ok(rows.into_iter().map(|s| (s.id, s.label())).collect())
    }
}
