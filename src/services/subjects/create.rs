use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::subjects::requests::CreateSubjectRequest;
use crate::models::subjects::responses::SubjectResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::SubjectService;

pub async fn create_subject(
    service: &SubjectService,
    subject_data: CreateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if subject_data.subject_code.trim().is_empty() || subject_data.subject_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "科目代码与名称不能为空",
        )));
    }

    let storage = service.get_storage(request);

    // 学段必须存在
    match storage.get_level_by_id(subject_data.level_id).await {
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

    // 授课教师必须存在
    match storage.get_teacher_by_id(subject_data.teacher_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::TeacherNotFound,
                "指定的教师不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询教师失败: {e}"),
                )),
            );
        }
    }

    match storage.create_subject(subject_data).await {
        Ok(subject) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubjectResponse { subject },
            "科目创建成功",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("创建科目失败: {e}"),
        ))),
    }
}
