//! 问卷题目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub criteria_id: i64,
    #[sea_orm(column_type = "Text")]
    pub question_text: String,
    pub display_order: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::criteria::Entity",
        from = "Column::CriteriaId",
        to = "super::criteria::Column::Id"
    )]
    Criterion,
    #[sea_orm(has_many = "super::scores::Entity")]
    Scores,
}

impl Related<super::criteria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Criterion.def()
    }
}

impl Related<super::scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_question(self) -> crate::models::questions::entities::Question {
        crate::models::questions::entities::Question {
            id: self.id,
            criteria_id: self.criteria_id,
            question_text: self.question_text,
            display_order: self.display_order,
            is_active: self.is_active,
        }
    }
}
