use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::questions::requests::{
    CreateCriterionRequest, CreateQuestionRequest, UpdateQuestionRequest,
};
use crate::models::students::entities::StudentRole;
use crate::services::ReferenceService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ReferenceService 实例
static REFERENCE_SERVICE: Lazy<ReferenceService> = Lazy::new(ReferenceService::new_lazy);

// HTTP处理程序
pub async fn list_levels(req: HttpRequest) -> ActixResult<HttpResponse> {
    REFERENCE_SERVICE.list_levels(&req).await
}

pub async fn evaluation_form(req: HttpRequest) -> ActixResult<HttpResponse> {
    REFERENCE_SERVICE.evaluation_form(&req).await
}

pub async fn create_criterion(
    req: HttpRequest,
    criterion_data: web::Json<CreateCriterionRequest>,
) -> ActixResult<HttpResponse> {
    REFERENCE_SERVICE
        .create_criterion(criterion_data.into_inner(), &req)
        .await
}

pub async fn create_question(
    req: HttpRequest,
    question_data: web::Json<CreateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    REFERENCE_SERVICE
        .create_question(question_data.into_inner(), &req)
        .await
}

pub async fn update_question(
    req: HttpRequest,
    question_id: SafeIDI64,
    update_data: web::Json<UpdateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    REFERENCE_SERVICE
        .update_question(question_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_question(
    req: HttpRequest,
    question_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    REFERENCE_SERVICE.delete_question(question_id.0, &req).await
}

// 配置路由：学段与问卷表单对登录学生开放，问卷维护仅管理员
pub fn configure_reference_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reference")
            .wrap(middlewares::RequireJWT)
            .route("/levels", web::get().to(list_levels))
            .route("/evaluation-form", web::get().to(evaluation_form))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(
                        StudentRole::admin_roles(),
                    ))
                    .route("/criteria", web::post().to(create_criterion))
                    .route("/questions", web::post().to(create_question))
                    .route("/questions/{id}", web::put().to(update_question))
                    .route("/questions/{id}", web::delete().to(delete_question)),
            ),
    );
}
