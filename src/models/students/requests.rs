use super::entities::StudentRole;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 学生列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub level_id: Option<i64>,
    pub section_id: Option<i64>,
    pub search: Option<String>,
}

// 学生创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<StudentRole>,
    pub level_id: i64,
    pub section_id: Option<i64>,
    pub college_year_level: Option<i32>,
}

// 学生更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<StudentRole>,
    pub level_id: Option<i64>,
    pub section_id: Option<i64>,
    pub college_year_level: Option<i32>,
}
