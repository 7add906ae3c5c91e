pub mod form;
pub mod levels;
pub mod questions;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::sync::Arc;
use std::time::Duration;

use crate::models::questions::requests::{
    CreateCriterionRequest, CreateQuestionRequest, UpdateQuestionRequest,
};
use crate::models::questions::responses::EvaluationFormResponse;
use crate::storage::Storage;

// 问卷表单进程内缓存，题库变更时整体失效
static FORM_CACHE: Lazy<Cache<&'static str, Arc<EvaluationFormResponse>>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(Duration::from_secs(300))
        .max_capacity(4)
        .build()
});

const FORM_CACHE_KEY: &str = "evaluation_form";

pub struct ReferenceService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReferenceService {
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

    pub(crate) async fn cached_form(&self) -> Option<Arc<EvaluationFormResponse>> {
        FORM_CACHE.get(FORM_CACHE_KEY).await
    }

    pub(crate) async fn cache_form(&self, form: Arc<EvaluationFormResponse>) {
        FORM_CACHE.insert(FORM_CACHE_KEY, form).await;
    }

    /// 题库变更后失效缓存
    pub(crate) async fn invalidate_form_cache(&self) {
        FORM_CACHE.invalidate(FORM_CACHE_KEY).await;
    }

    // 学段及班组列表
    pub async fn list_levels(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        levels::list_levels(self, request).await
    }

    // 按维度分组的问卷表单
    pub async fn evaluation_form(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        form::evaluation_form(self, request).await
    }

    // 创建评价维度
    pub async fn create_criterion(
        &self,
        data: CreateCriterionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::create_criterion(self, data, request).await
    }

    // 创建题目
    pub async fn create_question(
        &self,
        data: CreateQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::create_question(self, data, request).await
    }

    // 更新题目
    pub async fn update_question(
        &self,
        question_id: i64,
        data: UpdateQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::update_question(self, question_id, data, request).await
    }

    // 删除题目
    pub async fn delete_question(
        &self,
        question_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::delete_question(self, question_id, request).await
    }
}
