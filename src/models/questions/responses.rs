use super::entities::{Criterion, Question};
use serde::Serialize;
use ts_rs::TS;

// 按维度分组的问卷表单
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct CriterionGroup {
    pub criterion: Criterion,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct EvaluationFormResponse {
    pub groups: Vec<CriterionGroup>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct QuestionResponse {
    pub question: Question,
}
