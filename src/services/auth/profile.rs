use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::auth::responses::StudentInfoResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::AuthService;

pub async fn handle_me(_service: &AuthService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_student(request) {
        Some(student) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentInfoResponse { student },
            "Student information retrieved successfully",
        ))),
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))),
    }
}
