/*!
 * JWT 认证中间件
 *
 * 验证 access token 并把对应的学生账号放入请求扩展，
 * 后续处理程序通过 `RequireJWT::extract_student` 读取。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::RequireJWT;
 *
 * App::new().service(
 *     web::scope("/api")
 *         .wrap(RequireJWT)
 *         .route("/protected", web::get().to(protected_handler)),
 * )
 * ```
 *
 * ## 认证流程
 *
 * 1. 客户端在请求头中包含 `Authorization: Bearer <JWT_TOKEN>`
 * 2. 中间件验证 access token 签名与有效期
 * 3. 令牌有效则按 token 缓存或存储加载学生账号，写入请求扩展
 * 4. 令牌无效或缺失返回 401
 */

use crate::models::students::entities::{Student, StudentRole};
use crate::models::ErrorCode;
use crate::storage::Storage;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::time::Duration;
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

/// token -> 学生账号缓存，减少每个请求的数据库查询。
/// TTL 要短于 access token 有效期，账号变更最多延迟 60 秒生效。
static TOKEN_CACHE: Lazy<Cache<String, Student>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(Duration::from_secs(60))
        .max_capacity(10_000)
        .build()
});

#[derive(Clone)]
pub struct RequireJWT;

// 辅助函数：提取并验证 JWT access token
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<Student, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let claims = crate::utils::jwt::JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    if let Some(student) = TOKEN_CACHE.get(token).await {
        return Ok(student);
    }

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    let student_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| "Invalid student ID in JWT".to_string())?;

    let student = storage
        .get_student_by_id(student_id)
        .await
        .map_err(|_| "Failed to retrieve student from storage".to_string())?
        .ok_or_else(|| "Student not found".to_string())?;

    TOKEN_CACHE.insert(token.to_string(), student.clone()).await;

    Ok(student)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Success, "")
                        .map_into_right_body(),
                ));
            }

            match extract_and_validate_jwt(&req).await {
                Ok(student) => {
                    debug!("JWT authentication successful for ID: {}", student.id);
                    req.extensions_mut().insert(student);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取学生信息
impl RequireJWT {
    /// 从请求扩展中提取当前登录学生
    /// 仅在应用了 RequireJWT 中间件的路由处理程序中可用
    pub fn extract_student(req: &actix_web::HttpRequest) -> Option<Student> {
        req.extensions().get::<Student>().cloned()
    }

    /// 从请求扩展中提取学生 ID
    pub fn extract_student_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<Student>().map(|student| student.id)
    }

    /// 从请求扩展中提取学生角色
    pub fn extract_student_role(req: &actix_web::HttpRequest) -> Option<StudentRole> {
        req.extensions()
            .get::<Student>()
            .map(|student| student.role.clone())
    }
}
