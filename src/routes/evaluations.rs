use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::evaluations::requests::{
    EvaluationListParams, SubmitEvaluationRequest, TeacherSummaryParams,
};
use crate::models::students::entities::StudentRole;
use crate::services::EvaluationService;
use crate::utils::SafeIDI64;

// 懒加载的全局 EvaluationService 实例
static EVALUATION_SERVICE: Lazy<EvaluationService> = Lazy::new(EvaluationService::new_lazy);

// HTTP处理程序
pub async fn eligible_pairs(req: HttpRequest) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.eligible_pairs(&req).await
}

pub async fn submit_evaluation(
    req: HttpRequest,
    submit_data: web::Json<SubmitEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .submit(submit_data.into_inner(), &req)
        .await
}

pub async fn list_evaluations(
    req: HttpRequest,
    query: web::Query<EvaluationListParams>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .list_evaluations(query.into_inner(), &req)
        .await
}

pub async fn evaluation_detail(
    req: HttpRequest,
    evaluation_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .evaluation_detail(evaluation_id.0, &req)
        .await
}

pub async fn delete_evaluation(
    req: HttpRequest,
    evaluation_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .delete_evaluation(evaluation_id.0, &req)
        .await
}

pub async fn teacher_summary(
    req: HttpRequest,
    teacher_id: SafeIDI64,
    query: web::Query<TeacherSummaryParams>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .teacher_summary(teacher_id.0, query.into_inner(), &req)
        .await
}

// 配置路由：提交与查询对登录学生开放（服务层再做归属检查），
// 删除与教师汇总仅管理员
pub fn configure_evaluation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/evaluations")
            .wrap(middlewares::RequireJWT)
            .route("/eligible-pairs", web::get().to(eligible_pairs))
            .service(
                web::scope("/submit")
                    .wrap(middlewares::RateLimit::submit_evaluation())
                    .route("", web::post().to(submit_evaluation)),
            )
            .route("", web::get().to(list_evaluations))
            .service(
                web::scope("/reports")
                    .wrap(middlewares::RequireRole::new_any(
                        StudentRole::admin_roles(),
                    ))
                    .route("/teachers/{id}", web::get().to(teacher_summary)),
            )
            .route("/{id}", web::get().to(evaluation_detail))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(
                        StudentRole::admin_roles(),
                    ))
                    .route("/{id}", web::delete().to(delete_evaluation)),
            ),
    );
}
