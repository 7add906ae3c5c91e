use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::subjects::responses::SubjectResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::SubjectService;

pub async fn get_subject(
    service: &SubjectService,
    subject_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_subject_by_id(subject_id).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(SubjectResponse { subject }, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "科目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询科目失败: {e}"),
            )),
        ),
    }
}
