//! 评价主记录实体
//!
//! (student_id, teacher_id, subject_id) 三元组带唯一索引，数据库层兜底防重复提交。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub is_anonymous: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub comments: Option<String>,
    pub date_evaluated: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teacher,
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
    #[sea_orm(has_many = "super::scores::Entity")]
    Scores,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_evaluation(self) -> crate::models::evaluations::entities::Evaluation {
        use chrono::{DateTime, Utc};

        crate::models::evaluations::entities::Evaluation {
            id: self.id,
            student_id: self.student_id,
            teacher_id: self.teacher_id,
            subject_id: self.subject_id,
            is_anonymous: self.is_anonymous,
            comments: self.comments,
            date_evaluated: DateTime::<Utc>::from_timestamp(self.date_evaluated, 0)
                .unwrap_or_default(),
        }
    }
}
