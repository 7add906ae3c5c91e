use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 可评价的 (教师, 科目) 组合
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EligiblePair {
    pub teacher_id: i64,
    pub subject_id: i64,
    pub teacher_name: String,
    pub subject_label: String,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EligiblePairsResponse {
    pub items: Vec<EligiblePair>,
}

// 评价列表项；匿名提交对非管理员渲染 "Anonymous"
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationListItem {
    pub id: i64,
    pub student_name: String,
    pub teacher_name: String,
    pub subject_label: String,
    pub is_anonymous: bool,
    pub date_evaluated: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationListResponse {
    pub items: Vec<EvaluationListItem>,
    pub pagination: PaginationInfo,
}

// 单题结果
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct QuestionResult {
    pub question_id: i64,
    pub question_text: String,
    pub score_value: i32,
}

// 单个维度的聚合结果
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct CriterionResult {
    pub criteria_id: i64,
    pub criteria_name: String,
    pub average: f64,
    pub questions: Vec<QuestionResult>,
}

// 评价详情：整体均分 + 按维度聚合
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationDetailResponse {
    pub id: i64,
    pub student_name: String,
    pub teacher_name: String,
    pub subject_label: String,
    pub is_anonymous: bool,
    pub comments: Option<String>,
    pub date_evaluated: chrono::DateTime<chrono::Utc>,
    pub overall_average: f64,
    pub criteria: Vec<CriterionResult>,
}

// 维度均分（教师汇总用，无单题明细）
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct CriterionAverage {
    pub criteria_id: i64,
    pub criteria_name: String,
    pub average: f64,
}

// 教师汇总：跨评价聚合，可按科目过滤
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct TeacherSummaryResponse {
    pub teacher_id: i64,
    pub teacher_name: String,
    pub subject_id: Option<i64>,
    pub evaluation_count: i64,
    pub overall_average: f64,
    pub criteria: Vec<CriterionAverage>,
}

// 提交成功响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct SubmitEvaluationResponse {
    pub evaluation_id: i64,
    pub date_evaluated: chrono::DateTime<chrono::Utc>,
}
