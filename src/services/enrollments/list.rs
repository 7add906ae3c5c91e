use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::enrollments::requests::EnrollmentListParams;
use crate::models::{ApiResponse, ErrorCode};

use super::EnrollmentService;

pub async fn list_enrollments(
    service: &EnrollmentService,
    mut query: EnrollmentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current) = RequireJWT::extract_student(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    // 普通学生只能看自己的选课
    if !current.role.is_admin() {
        query.student_id = Some(current.id);
    }

    let storage = service.get_storage(request);

    match storage.list_enrollments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询选课列表失败: {e}"),
            )),
        ),
    }
}
