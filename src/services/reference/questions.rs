use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::questions::requests::{
    CreateCriterionRequest, CreateQuestionRequest, UpdateQuestionRequest,
};
use crate::models::questions::responses::QuestionResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::ReferenceService;

pub async fn create_criterion(
    service: &ReferenceService,
    data: CreateCriterionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if data.criteria_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "维度名称不能为空",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_criterion(data).await {
        Ok(criterion) => {
            service.invalidate_form_cache().await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(criterion, "评价维度创建成功")))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("创建评价维度失败: {e}"),
        ))),
    }
}

pub async fn create_question(
    service: &ReferenceService,
    data: CreateQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if data.question_text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "题目内容不能为空",
        )));
    }

    let storage = service.get_storage(request);

    // 维度必须存在
    let criteria = match storage.list_criteria().await {
        Ok(criteria) => criteria,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评价维度失败: {e}"),
                )),
            );
        }
    };
    if !criteria.iter().any(|c| c.id == data.criteria_id) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CriterionNotFound,
            "指定的评价维度不存在",
        )));
    }

    match storage.create_question(data).await {
        Ok(question) => {
            service.invalidate_form_cache().await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                QuestionResponse { question },
                "题目创建成功",
            )))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("创建题目失败: {e}"),
        ))),
    }
}

pub async fn update_question(
    service: &ReferenceService,
    question_id: i64,
    data: UpdateQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_question(question_id, data).await {
        Ok(Some(question)) => {
            service.invalidate_form_cache().await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                QuestionResponse { question },
                "题目更新成功",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "题目不存在",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("更新题目失败: {e}"),
        ))),
    }
}

pub async fn delete_question(
    service: &ReferenceService,
    question_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_question(question_id).await {
        Ok(true) => {
            service.invalidate_form_cache().await;
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("题目已删除")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "题目不存在",
        ))),
        // 已有得分引用时数据库会拒绝删除，提示改为停用
        Err(e) => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("删除题目失败，已被评价引用时请改为停用: {e}"),
        ))),
    }
}
