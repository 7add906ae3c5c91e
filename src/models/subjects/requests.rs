use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 科目列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub level_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
}

// 科目创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct CreateSubjectRequest {
    pub subject_code: String,
    pub subject_name: String,
    pub level_id: i64,
    pub teacher_id: i64,
}

// 科目更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct UpdateSubjectRequest {
    pub subject_code: Option<String>,
    pub subject_name: Option<String>,
    pub level_id: Option<i64>,
    pub teacher_id: Option<i64>,
}
