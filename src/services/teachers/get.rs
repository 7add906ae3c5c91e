use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::teachers::responses::TeacherResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::TeacherService;

pub async fn get_teacher(
    service: &TeacherService,
    teacher_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(TeacherResponse { teacher }, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "教师不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询教师失败: {e}"),
            )),
        ),
    }
}
