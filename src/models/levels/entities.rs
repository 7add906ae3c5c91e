use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学段：固定种子数据（Junior High / Senior High / College）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/level.ts")]
pub struct Level {
    pub id: i64,
    pub level_name: String,
}

// 学段下的班组
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/level.ts")]
pub struct Section {
    pub id: i64,
    pub section_name: String,
    pub level_id: i64,
}
