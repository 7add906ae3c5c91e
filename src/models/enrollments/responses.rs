use super::entities::Enrollment;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 单个科目的选课失败原因
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollFailure {
    pub subject_id: i64,
    pub reason: String,
}

// 批量选课结果：成功数 + 跳过的重复数 + 明细失败
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollResult {
    pub enrolled: i64,
    pub skipped: i64,
    pub failures: Vec<EnrollFailure>,
}

// 选课列表项，带展示名
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub enrollment: Enrollment,
    pub student_name: String,
    pub subject_label: String,
    pub teacher_name: String,
}

// 选课列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentListResponse {
    pub items: Vec<EnrollmentListItem>,
    pub pagination: PaginationInfo,
}
