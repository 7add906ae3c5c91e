use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 评价维度
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct Criterion {
    pub id: i64,
    pub criteria_name: String,
    pub display_order: i32,
}

// 问卷题目，Likert 1-5
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct Question {
    pub id: i64,
    pub criteria_id: i64,
    pub question_text: String,
    pub display_order: i32,
    pub is_active: bool,
}
