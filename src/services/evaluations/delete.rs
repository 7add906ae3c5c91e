use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::EvaluationService;

pub async fn delete_evaluation(
    service: &EvaluationService,
    evaluation_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_evaluation_with_scores(evaluation_id).await {
        Ok(true) => {
            tracing::info!("Evaluation {} deleted", evaluation_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("评价已删除")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EvaluationNotFound,
            "评价不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除评价失败: {e}"),
            )),
        ),
    }
}
