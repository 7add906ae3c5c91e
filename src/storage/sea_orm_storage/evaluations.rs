use super::SeaOrmStorage;
use crate::entity::evaluations::{ActiveModel, Column, Entity as Evaluations};
use crate::entity::scores::{ActiveModel as ScoreActiveModel, Entity as Scores};
use crate::errors::{Result, TevalError};
use crate::models::{
    PaginationInfo,
    evaluations::{
        entities::{Evaluation, Score},
        requests::{EvaluationListParams, NewEvaluation},
        responses::{EvaluationListItem, EvaluationListResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 指定时间戳之后该三元组是否已有评价（None = 全时段）
    pub async fn exists_evaluation_since_impl(
        &self,
        student_id: i64,
        teacher_id: i64,
        subject_id: i64,
        since: Option<i64>,
    ) -> Result<bool> {
        let mut select = Evaluations::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::TeacherId.eq(teacher_id))
            .filter(Column::SubjectId.eq(subject_id));

        if let Some(since) = since {
            select = select.filter(Column::DateEvaluated.gte(since));
        }

        let count = select
            .count(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询评价是否存在失败: {e}")))?;

        Ok(count > 0)
    }

    /// 评价 + 全部得分同一事务落库
    ///
    /// 唯一索引 (student_id, teacher_id, subject_id) 兜底并发重复提交，
    /// 冲突通过 From<DbErr> 归类为 UniqueViolation 上抛。
    pub async fn create_evaluation_with_scores_impl(
        &self,
        new: NewEvaluation,
    ) -> Result<Evaluation> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TevalError::database_operation(format!("开启事务失败: {e}")))?;

        let model = ActiveModel {
            student_id: Set(new.student_id),
            teacher_id: Set(new.teacher_id),
            subject_id: Set(new.subject_id),
            is_anonymous: Set(new.is_anonymous),
            comments: Set(new.comments),
            date_evaluated: Set(now),
            ..Default::default()
        };

        let inserted = match model.insert(&txn).await {
            Ok(m) => m,
            Err(e) => {
                let err = TevalError::from(e);
                let _ = txn.rollback().await;
                return Err(err);
            }
        };

        let score_models: Vec<ScoreActiveModel> = new
            .scores
            .iter()
            .map(|s| ScoreActiveModel {
                evaluation_id: Set(inserted.id),
                question_id: Set(s.question_id),
                score_value: Set(s.score_value),
                ..Default::default()
            })
            .collect();

        if let Err(e) = Scores::insert_many(score_models).exec(&txn).await {
            let err = TevalError::database_operation(format!("写入得分失败: {e}"));
            let _ = txn.rollback().await;
            return Err(err);
        }

        txn.commit()
            .await
            .map_err(|e| TevalError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(inserted.into_evaluation())
    }

    /// 评价的全部得分
    pub async fn get_scores_for_evaluation_impl(&self, evaluation_id: i64) -> Result<Vec<Score>> {
        use crate::entity::scores;

        let rows = Scores::find()
            .filter(scores::Column::EvaluationId.eq(evaluation_id))
            .order_by_asc(scores::Column::QuestionId)
            .all(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询得分失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_score()).collect())
    }

    /// 分页列出评价，带真实姓名（匿名遮蔽由服务层处理）
    pub async fn list_evaluations_with_pagination_impl(
        &self,
        query: EvaluationListParams,
        student_id: Option<i64>,
    ) -> Result<EvaluationListResponse> {
        let (page, size) = query.pagination.normalized();
        let (page, size) = (page as u64, size as u64);

        let mut select = Evaluations::find();

        if let Some(student_id) = student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        select = select.order_by_desc(Column::DateEvaluated);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TevalError::database_operation(format!("查询评价总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| TevalError::database_operation(format!("查询评价页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询评价列表失败: {e}")))?;

        let student_ids: Vec<i64> = rows.iter().map(|r| r.student_id).collect();
        let teacher_ids: Vec<i64> = rows.iter().map(|r| r.teacher_id).collect();
        let subject_ids: Vec<i64> = rows.iter().map(|r| r.subject_id).collect();

        let student_names = self.student_name_map(&student_ids).await?;
        let teacher_names = self.teacher_name_map(&teacher_ids).await?;
        let subject_labels = self.subject_label_map(&subject_ids).await?;

        let items = rows
            .into_iter()
            .map(|row| EvaluationListItem {
                id: row.id,
                student_name: student_names
                    .get(&row.student_id)
                    .cloned()
                    .unwrap_or_default(),
                teacher_name: teacher_names
                    .get(&row.teacher_id)
                    .cloned()
                    .unwrap_or_default(),
                subject_label: subject_labels
                    .get(&row.subject_id)
                    .cloned()
                    .unwrap_or_default(),
                is_anonymous: row.is_anonymous,
                date_evaluated: chrono::DateTime::from_timestamp(row.date_evaluated, 0)
                    .unwrap_or_default(),
            })
            .collect();

        Ok(EvaluationListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 评价 + 展示名（详情页）
    pub async fn get_evaluation_display_impl(
        &self,
        id: i64,
    ) -> Result<Option<(Evaluation, String, String, String)>> {
        let Some(row) = Evaluations::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询评价失败: {e}")))?
        else {
            return Ok(None);
        };

        let student_names = self.student_name_map(&[row.student_id]).await?;
        let teacher_names = self.teacher_name_map(&[row.teacher_id]).await?;
        let subject_labels = self.subject_label_map(&[row.subject_id]).await?;

        let student_name = student_names
            .get(&row.student_id)
            .cloned()
            .unwrap_or_default();
        let teacher_name = teacher_names
            .get(&row.teacher_id)
            .cloned()
            .unwrap_or_default();
        let subject_label = subject_labels
            .get(&row.subject_id)
            .cloned()
            .unwrap_or_default();

        Ok(Some((
            row.into_evaluation(),
            student_name,
            teacher_name,
            subject_label,
        )))
    }

    /// 两步删除：先删得分再删评价，同一事务
    pub async fn delete_evaluation_with_scores_impl(&self, id: i64) -> Result<bool> {
        use crate::entity::scores;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| TevalError::database_operation(format!("开启事务失败: {e}")))?;

        if let Err(e) = Scores::delete_many()
            .filter(scores::Column::EvaluationId.eq(id))
            .exec(&txn)
            .await
        {
            let err = TevalError::database_operation(format!("删除得分失败: {e}"));
            let _ = txn.rollback().await;
            return Err(err);
        }

        let deleted = match Evaluations::delete_by_id(id).exec(&txn).await {
            Ok(res) => res.rows_affected > 0,
            Err(e) => {
                let err = TevalError::database_operation(format!("删除评价失败: {e}"));
                let _ = txn.rollback().await;
                return Err(err);
            }
        };

        txn.commit()
            .await
            .map_err(|e| TevalError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(deleted)
    }

    /// 教师全部得分行 (question_id, score_value)，可按科目过滤；返回 (评价数, 得分行)
    pub async fn teacher_score_rows_impl(
        &self,
        teacher_id: i64,
        subject_id: Option<i64>,
    ) -> Result<(i64, Vec<(i64, i32)>)> {
        use crate::entity::scores;

        let mut select = Evaluations::find().filter(Column::TeacherId.eq(teacher_id));

        if let Some(subject_id) = subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        let evaluations = select
            .all(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询教师评价失败: {e}")))?;

        if evaluations.is_empty() {
            return Ok((0, Vec::new()));
        }

        let evaluation_ids: Vec<i64> = evaluations.iter().map(|e| e.id).collect();
        let count = evaluation_ids.len() as i64;

        let rows = Scores::find()
            .filter(scores::Column::EvaluationId.is_in(evaluation_ids))
            .all(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询教师得分失败: {e}")))?;

        Ok((
            count,
            rows.into_iter().map(|s| (s.question_id, s.score_value)).collect(),
        ))
    }
}
