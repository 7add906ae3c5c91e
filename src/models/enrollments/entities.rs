use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 选课记录，teacher_id 由科目在创建时冗余写入
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}
