use super::entities::{Level, Section};
use serde::Serialize;
use ts_rs::TS;

// 学段及其班组
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/level.ts")]
pub struct LevelWithSections {
    pub level: Level,
    pub sections: Vec<Section>,
}

// 学段列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/level.ts")]
pub struct LevelListResponse {
    pub items: Vec<LevelWithSections>,
}
