use serde::Deserialize;
use ts_rs::TS;

// 新建评价维度
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct CreateCriterionRequest {
    pub criteria_name: String,
    pub display_order: i32,
}

// 新建题目
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct CreateQuestionRequest {
    pub criteria_id: i64,
    pub question_text: String,
    pub display_order: i32,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

// 更新题目（停用题目走 is_active = false）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct UpdateQuestionRequest {
    pub criteria_id: Option<i64>,
    pub question_text: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

fn default_is_active() -> bool {
    true
}
