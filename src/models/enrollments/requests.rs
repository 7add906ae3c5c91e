use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 批量选课请求；student_id 仅管理员可代填
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollRequest {
    pub student_id: Option<i64>,
    pub subject_ids: Vec<i64>,
}

// 选课列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub student_id: Option<i64>,
    pub subject_id: Option<i64>,
}
