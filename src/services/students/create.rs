use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::students::requests::CreateStudentRequest;
use crate::models::students::responses::StudentResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_full_name, validate_password_simple};

use super::StudentService;

pub async fn create_student(
    service: &StudentService,
    mut student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 姓名校验
    if let Err(msg) = validate_full_name(&student_data.full_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // 邮箱校验
    if let Err(msg) = validate_email(&student_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::StudentEmailInvalid, msg)));
    }

    // 密码策略校验
    if let Err(msg) = validate_password_simple(&student_data.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::StudentPasswordWeak, msg)));
    }

    let storage = service.get_storage(request);

    // 学段必须存在
    match storage.get_level_by_id(student_data.level_id).await {
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

    // 哈希密码后交给存储层
    student_data.password = match hash_password(&student_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("密码哈希失败: {e}"),
                )),
            );
        }
    };

    match storage.create_student(student_data).await {
        Ok(student) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentResponse { student },
            "学生创建成功",
        ))),
        Err(e) if e.is_unique_violation() => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::StudentAlreadyExists, "该邮箱已被注册"),
        )),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::StudentCreationFailed,
            format!("创建学生失败: {e}"),
        ))),
    }
}
