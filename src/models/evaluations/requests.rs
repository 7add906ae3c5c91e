use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 单题打分，Likert 1-5
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct QuestionScore {
    pub question_id: i64,
    pub score_value: i32,
}

// 提交评价；student_id 仅管理员可代填
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct SubmitEvaluationRequest {
    pub student_id: Option<i64>,
    pub teacher_id: i64,
    pub subject_id: i64,
    #[serde(default)]
    pub is_anonymous: bool,
    pub comments: Option<String>,
    pub scores: Vec<QuestionScore>,
}

// 存储层写入用：校验通过后的完整评价
#[derive(Debug, Clone)]
pub struct NewEvaluation {
    pub student_id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub is_anonymous: bool,
    pub comments: Option<String>,
    pub scores: Vec<QuestionScore>,
}

// 评价列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub teacher_id: Option<i64>,
    pub subject_id: Option<i64>,
}

// 教师汇总查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct TeacherSummaryParams {
    pub subject_id: Option<i64>,
}
