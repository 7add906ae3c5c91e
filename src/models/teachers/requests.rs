use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 教师列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub level_id: Option<i64>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

// 教师创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct CreateTeacherRequest {
    pub full_name: String,
    pub department: String,
    pub level_id: i64,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

// 教师更新请求，is_active 走这里切换
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct UpdateTeacherRequest {
    pub full_name: Option<String>,
    pub department: Option<String>,
    pub level_id: Option<i64>,
    pub is_active: Option<bool>,
}

fn default_is_active() -> bool {
    true
}
