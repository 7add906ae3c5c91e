use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::levels::responses::{LevelListResponse, LevelWithSections};
use crate::models::{ApiResponse, ErrorCode};

use super::ReferenceService;

pub async fn list_levels(
    service: &ReferenceService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let levels = match storage.list_levels().await {
        Ok(levels) => levels,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学段失败: {e}"),
                )),
            );
        }
    };

    let sections = match storage.list_sections().await {
        Ok(sections) => sections,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询班组失败: {e}"),
                )),
            );
        }
    };

    let items = levels
        .into_iter()
        .map(|level| {
            let level_sections = sections
                .iter()
                .filter(|s| s.level_id == level.id)
                .cloned()
                .collect();
            LevelWithSections {
                level,
                sections: level_sections,
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(LevelListResponse { items }, "查询成功")))
}
