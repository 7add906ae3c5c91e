use super::SeaOrmStorage;
use crate::entity::criteria::{
    ActiveModel as CriterionActiveModel, Column as CriteriaColumn, Entity as Criteria,
};
use crate::entity::questions::{ActiveModel, Column, Entity as Questions};
use crate::errors::{Result, TevalError};
use crate::models::questions::{
    entities::{Criterion, Question},
    requests::{CreateCriterionRequest, CreateQuestionRequest, UpdateQuestionRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部维度，按 display_order 排序
    pub async fn list_criteria_impl(&self) -> Result<Vec<Criterion>> {
        let result = Criteria::find()
            .order_by_asc(CriteriaColumn::DisplayOrder)
            .order_by_asc(CriteriaColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询评价维度失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_criterion()).collect())
    }

    /// 列出题目；only_active 时只取启用的
    pub async fn list_questions_impl(&self, only_active: bool) -> Result<Vec<Question>> {
        let mut select = Questions::find();

        if only_active {
            select = select.filter(Column::IsActive.eq(true));
        }

        let result = select
            .order_by_asc(Column::CriteriaId)
            .order_by_asc(Column::DisplayOrder)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_question()).collect())
    }

    /// 通过 ID 获取题目
    pub async fn get_question_by_id_impl(&self, id: i64) -> Result<Option<Question>> {
        let result = Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(result.map(|m| m.into_question()))
    }

    /// 创建维度
    pub async fn create_criterion_impl(&self, req: CreateCriterionRequest) -> Result<Criterion> {
        let model = CriterionActiveModel {
            criteria_name: Set(req.criteria_name),
            display_order: Set(req.display_order),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("创建评价维度失败: {e}")))?;

        Ok(result.into_criterion())
    }

    /// 创建题目
    pub async fn create_question_impl(&self, req: CreateQuestionRequest) -> Result<Question> {
        let model = ActiveModel {
            criteria_id: Set(req.criteria_id),
            question_text: Set(req.question_text),
            display_order: Set(req.display_order),
            is_active: Set(req.is_active),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("创建题目失败: {e}")))?;

        Ok(result.into_question())
    }

    /// 更新题目
    pub async fn update_question_impl(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        let existing = self.get_question_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(criteria_id) = update.criteria_id {
            model.criteria_id = Set(criteria_id);
        }

        if let Some(question_text) = update.question_text {
            model.question_text = Set(question_text);
        }

        if let Some(display_order) = update.display_order {
            model.display_order = Set(display_order);
        }

        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("更新题目失败: {e}")))?;

        self.get_question_by_id_impl(id).await
    }

    /// 删除题目；已有得分引用时数据库 Restrict 会拒绝
    pub async fn delete_question_impl(&self, id: i64) -> Result<bool> {
        let result = Questions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("删除题目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
