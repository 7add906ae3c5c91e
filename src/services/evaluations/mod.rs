pub mod aggregate;
pub mod delete;
pub mod detail;
pub mod eligibility;
pub mod list;
pub mod submit;
pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::evaluations::requests::{
    EvaluationListParams, SubmitEvaluationRequest, TeacherSummaryParams,
};
use crate::storage::Storage;

/// 重复提交判定窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// 同一 (学生, 教师, 科目) 永远只允许一次
    AllTime,
    /// 同一 UTC 日内只允许一次
    SameDay,
}

/// 当前生效的重复提交策略
pub const DUPLICATE_POLICY: DuplicatePolicy = DuplicatePolicy::AllTime;

impl DuplicatePolicy {
    /// 查重起始时间戳；None 表示全时段
    pub fn since_timestamp(self, now: chrono::DateTime<chrono::Utc>) -> Option<i64> {
        match self {
            DuplicatePolicy::AllTime => None,
            DuplicatePolicy::SameDay => {
                let day_start = now
                    .date_naive()
                    .and_hms_opt(0, 0, 0)
                    .unwrap_or_default()
                    .and_utc();
                Some(day_start.timestamp())
            }
        }
    }
}

pub struct EvaluationService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 当前学生可评价的 (教师, 科目) 组合
    pub async fn eligible_pairs(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        eligibility::eligible_pairs(self, request).await
    }

    // 提交评价
    pub async fn submit(
        &self,
        data: SubmitEvaluationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit(self, data, request).await
    }

    // 评价列表
    pub async fn list_evaluations(
        &self,
        query: EvaluationListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_evaluations(self, query, request).await
    }

    // 评价详情（按维度聚合）
    pub async fn evaluation_detail(
        &self,
        evaluation_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::evaluation_detail(self, evaluation_id, request).await
    }

    // 删除评价（管理员）
    pub async fn delete_evaluation(
        &self,
        evaluation_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_evaluation(self, evaluation_id, request).await
    }

    // 教师汇总
    pub async fn teacher_summary(
        &self,
        teacher_id: i64,
        query: TeacherSummaryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        summary::teacher_summary(self, teacher_id, query, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_all_time_policy_has_no_window() {
        let now = chrono::Utc::now();
        assert_eq!(DuplicatePolicy::AllTime.since_timestamp(now), None);
    }

    #[test]
    fn test_same_day_policy_starts_at_midnight() {
        let now = chrono::Utc.with_ymd_and_hms(2026, 3, 15, 13, 45, 0).unwrap();
        let midnight = chrono::Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap();
        assert_eq!(
            DuplicatePolicy::SameDay.since_timestamp(now),
            Some(midnight.timestamp())
        );
    }

    #[test]
    fn test_active_policy_is_all_time() {
        assert_eq!(DUPLICATE_POLICY, DuplicatePolicy::AllTime);
    }
}
