use super::SeaOrmStorage;
use crate::entity::levels::{ActiveModel as LevelActiveModel, Column, Entity as Levels};
use crate::entity::sections::{ActiveModel as SectionActiveModel, Entity as Sections};
use crate::errors::{Result, TevalError};
use crate::models::levels::entities::{Level, Section};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部学段
    pub async fn list_levels_impl(&self) -> Result<Vec<Level>> {
        let result = Levels::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询学段失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_level()).collect())
    }

    /// 列出全部班组
    pub async fn list_sections_impl(&self) -> Result<Vec<Section>> {
        use crate::entity::sections;

        let result = Sections::find()
            .order_by_asc(sections::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询班组失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_section()).collect())
    }

    /// 通过 ID 获取学段
    pub async fn get_level_by_id_impl(&self, id: i64) -> Result<Option<Level>> {
        let result = Levels::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("查询学段失败: {e}")))?;

        Ok(result.map(|m| m.into_level()))
    }

    /// 统计学段数量（种子判断用）
    pub async fn count_levels_impl(&self) -> Result<u64> {
        let count = Levels::find()
            .count(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("统计学段数量失败: {e}")))?;

        Ok(count)
    }

    /// 创建学段
    pub async fn create_level_impl(&self, level_name: &str) -> Result<Level> {
        let model = LevelActiveModel {
            level_name: Set(level_name.to_string()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("创建学段失败: {e}")))?;

        Ok(result.into_level())
    }

    /// 创建班组
    pub async fn create_section_impl(&self, level_id: i64, section_name: &str) -> Result<Section> {
        let model = SectionActiveModel {
            section_name: Set(section_name.to_string()),
            level_id: Set(level_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TevalError::database_operation(format!("创建班组失败: {e}")))?;

        Ok(result.into_section())
    }
}
