//! 业务模型定义
//!
//! 按领域拆分子模块，每个领域下分 entities / requests / responses。

pub mod auth;
pub mod common;
pub mod enrollments;
pub mod evaluations;
pub mod levels;
pub mod questions;
pub mod students;
pub mod subjects;
pub mod teachers;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

// 应用启动时间，用于系统状态接口的 uptime 计算
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
