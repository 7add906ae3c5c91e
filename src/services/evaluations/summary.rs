use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::evaluations::requests::TeacherSummaryParams;
use crate::models::evaluations::responses::TeacherSummaryResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::aggregate::{criteria_averages, overall_average};
use super::EvaluationService;

pub async fn teacher_summary(
    service: &EvaluationService,
    teacher_id: i64,
    query: TeacherSummaryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let teacher = match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(teacher)) => teacher,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TeacherNotFound,
                "教师不存在",
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
    };

    let (evaluation_count, rows) = match storage
        .teacher_score_rows(teacher_id, query.subject_id)
        .await
    {
        Ok(found) => found,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评分失败: {e}"),
                )),
            );
        }
    };

    let questions = match storage.list_questions(false).await {
        Ok(questions) => questions,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询题目失败: {e}"),
                )),
            );
        }
    };
    let criteria = match storage.list_criteria().await {
        Ok(criteria) => criteria,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询维度失败: {e}"),
                )),
            );
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TeacherSummaryResponse {
            teacher_id: teacher.id,
            teacher_name: teacher.full_name,
            subject_id: query.subject_id,
            evaluation_count,
            overall_average: overall_average(&rows),
            criteria: criteria_averages(&rows, &questions, &criteria),
        },
        "查询成功",
    )))
}
