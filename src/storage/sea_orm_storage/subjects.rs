use super::SeaOrmStorage;
use crate::entity::prelude::{Enrollments, Evaluations};
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::errors::{Result, TevalError};
use crate::models::{
    PaginationInfo,
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListParams, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建科目
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let model = ActiveModel {
            subject_code: Set(req.subject_code),
            subject_name: Set(req.subject_name),
            level_id: Set(req.level_id),
            teacher_id: Set(req.teacher_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    /// 通过 ID 获取科目
    pub async fn get_subject_by_id_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 分页列出科目
    pub async fn list_subjects_with_pagination_impl(
        &self,
        query: SubjectListParams,
    ) -> Result<SubjectListResponse> {
        let (page, size) = query.pagination.normalized();
        let (page, size) = (page as u64, size as u64);

        let mut select = Subjects::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::SubjectCode.contains(&escaped))
                    .add(Column::SubjectName.contains(&escaped)),
            );
        }

        if let Some(level_id) = query.level_id {
            select = select.filter(Column::LevelId.eq(level_id));
        }

        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        select = select.order_by_asc(Column::SubjectCode);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TevalError::database_operation(format!("查询科目总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| TevalError::database_operation(format!("查询科目页数失败: {e}")))?;

        let subjects = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(SubjectListResponse {
            items: subjects.into_iter().map(|m| m.into_subject()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新科目
    pub async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let existing = self.get_subject_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(subject_code) = update.subject_code {
            model.subject_code = Set(subject_code);
        }

        if let Some(subject_name) = update.subject_name {
            model.subject_name = Set(subject_name);
        }

        if let Some(level_id) = update.level_id {
            model.level_id = Set(level_id);
        }

        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("更新科目失败: {e}")))?;

        self.get_subject_by_id_impl(id).await
    }

    /// 删除科目
    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("删除科目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 科目是否仍被选课或评价引用
    pub async fn subject_has_references_impl(&self, id: i64) -> Result<bool> {
        use crate::entity::{enrollments, evaluations};

        let enrollment_count = Enrollments::find()
            .filter(enrollments::Column::SubjectId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("统计科目选课失败: {e}")))?;
        if enrollment_count > 0 {
            return Ok(true);
        }

        let evaluation_count = Evaluations::find()
            .filter(evaluations::Column::SubjectId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("统计科目评价失败: {e}")))?;

        Ok(evaluation_count > 0)
    }
}
