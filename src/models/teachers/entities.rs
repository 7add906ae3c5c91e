use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教师实体（仅作为被评价对象，不登录系统）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct Teacher {
    pub id: i64,
    pub full_name: String,
    pub department: String,
    pub level_id: i64,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
