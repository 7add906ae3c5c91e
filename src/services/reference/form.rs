use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::questions::entities::{Criterion, Question};
use crate::models::questions::responses::{CriterionGroup, EvaluationFormResponse};
use crate::models::{ApiResponse, ErrorCode};

use super::ReferenceService;

/// 问卷表单：维度按 display_order，组内题目按 display_order
pub async fn evaluation_form(
    service: &ReferenceService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 先查进程内缓存
    if let Some(form) = service.cached_form().await {
        return Ok(HttpResponse::Ok().json(ApiResponse::success((*form).clone(), "查询成功")));
    }

    let storage = service.get_storage(request);

    let criteria = match storage.list_criteria().await {
        Ok(criteria) => criteria,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评价维度失败: {e}"),
                )),
            );
        }
    };

    let questions = match storage.list_questions(true).await {
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

    let form = Arc::new(group_by_criteria(criteria, questions));
    service.cache_form(form.clone()).await;

    Ok(HttpResponse::Ok().json(ApiResponse::success((*form).clone(), "查询成功")))
}

/// 纯分组逻辑，没有题目的维度不出现在表单里
pub fn group_by_criteria(criteria: Vec<Criterion>, questions: Vec<Question>) -> EvaluationFormResponse {
    let groups = criteria
        .into_iter()
        .filter_map(|criterion| {
            let group_questions: Vec<Question> = questions
                .iter()
                .filter(|q| q.criteria_id == criterion.id)
                .cloned()
                .collect();
            if group_questions.is_empty() {
                return None;
            }
            Some(CriterionGroup {
                criterion,
                questions: group_questions,
            })
        })
        .collect();

    EvaluationFormResponse { groups }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(id: i64, name: &str, order: i32) -> Criterion {
        Criterion {
            id,
            criteria_name: name.to_string(),
            display_order: order,
        }
    }

    fn question(id: i64, criteria_id: i64) -> Question {
        Question {
            id,
            criteria_id,
            question_text: format!("Question {id}"),
            display_order: id as i32,
            is_active: true,
        }
    }

    #[test]
    fn test_groups_follow_criteria_order() {
        let criteria = vec![criterion(1, "Teaching", 1), criterion(2, "Management", 2)];
        let questions = vec![question(1, 1), question(2, 2), question(3, 1)];

        let form = group_by_criteria(criteria, questions);

        assert_eq!(form.groups.len(), 2);
        assert_eq!(form.groups[0].criterion.id, 1);
        assert_eq!(form.groups[0].questions.len(), 2);
        assert_eq!(form.groups[1].questions.len(), 1);
    }

    #[test]
    fn test_empty_criterion_is_dropped() {
        let criteria = vec![criterion(1, "Teaching", 1), criterion(2, "Empty", 2)];
        let questions = vec![question(1, 1)];

        let form = group_by_criteria(criteria, questions);

        assert_eq!(form.groups.len(), 1);
        assert_eq!(form.groups[0].criterion.id, 1);
    }
}
