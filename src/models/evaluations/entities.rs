use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 评价主记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct Evaluation {
    pub id: i64,
    pub student_id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub is_anonymous: bool,
    pub comments: Option<String>,
    pub date_evaluated: chrono::DateTime<chrono::Utc>,
}

// 单题得分
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct Score {
    pub id: i64,
    pub evaluation_id: i64,
    pub question_id: i64,
    pub score_value: i32,
}
