use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::evaluations::requests::EvaluationListParams;
use crate::models::evaluations::responses::EvaluationListItem;
use crate::models::{ApiResponse, ErrorCode};

use super::EvaluationService;

/// 匿名遮蔽：非管理员视角下匿名评价不显示学生姓名
pub fn mask_anonymous(items: &mut [EvaluationListItem], viewer_is_admin: bool) {
    if viewer_is_admin {
        return;
    }
    for item in items.iter_mut() {
        if item.is_anonymous {
            item.student_name = "Anonymous".to_string();
        }
    }
}

pub async fn list_evaluations(
    service: &EvaluationService,
    query: EvaluationListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current) = RequireJWT::extract_student(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    // 普通学生只能看自己的评价
    let student_filter = if current.role.is_admin() {
        None
    } else {
        Some(current.id)
    };

    let storage = service.get_storage(request);

    match storage
        .list_evaluations_with_pagination(query, student_filter)
        .await
    {
        Ok(mut response) => {
            mask_anonymous(&mut response.items, current.role.is_admin());
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询评价列表失败: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, student_name: &str, is_anonymous: bool) -> EvaluationListItem {
        EvaluationListItem {
            id,
            student_name: student_name.to_string(),
            teacher_name: "王老师".to_string(),
            subject_label: "MATH101 - 高等数学".to_string(),
            is_anonymous,
            date_evaluated: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_mask_hides_anonymous_for_non_admin() {
        let mut items = vec![item(1, "张三", true), item(2, "李四", false)];
        mask_anonymous(&mut items, false);
        assert_eq!(items[0].student_name, "Anonymous");
        assert_eq!(items[1].student_name, "李四");
    }

    #[test]
    fn test_admin_sees_real_names() {
        let mut items = vec![item(1, "张三", true)];
        mask_anonymous(&mut items, true);
        assert_eq!(items[0].student_name, "张三");
    }
}
