use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::teachers::requests::CreateTeacherRequest;
use crate::models::teachers::responses::TeacherResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_full_name;

use super::TeacherService;

pub async fn create_teacher(
    service: &TeacherService,
    teacher_data: CreateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_full_name(&teacher_data.full_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    if teacher_data.department.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "院系不能为空",
        )));
    }

    let storage = service.get_storage(request);

    // 学段必须存在
    match storage.get_level_by_id(teacher_data.level_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::LevelNotFound,
                "指定的学段不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学段失败: {e}"),
                )),
            );
        }
    }

    match storage.create_teacher(teacher_data).await {
        Ok(teacher) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TeacherResponse { teacher },
            "教师创建成功",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("创建教师失败: {e}"),
        ))),
    }
}
