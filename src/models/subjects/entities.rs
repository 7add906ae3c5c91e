use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 科目实体：归属一个学段、一位授课教师
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct Subject {
    pub id: i64,
    pub subject_code: String,
    pub subject_name: String,
    pub level_id: i64,
    pub teacher_id: i64,
}

impl Subject {
    pub fn label(&self) -> String {
        format!("{} - {}", self.subject_code, self.subject_name)
    }
}
