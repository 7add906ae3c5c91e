use std::collections::BTreeMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::evaluations::entities::Score;
use crate::models::evaluations::responses::{
    CriterionResult, EvaluationDetailResponse, QuestionResult,
};
use crate::models::questions::entities::{Criterion, Question};
use crate::models::{ApiResponse, ErrorCode};

use super::aggregate::{overall_average, round2};
use super::EvaluationService;

/// 把单次评价的得分按维度分组，维度按 criteria_id 升序。
/// 题目或维度已被删除的得分行忽略。
pub fn build_criterion_results(
    scores: &[Score],
    questions: &[Question],
    criteria: &[Criterion],
) -> Vec<CriterionResult> {
    let question_index: BTreeMap<i64, &Question> = questions.iter().map(|q| (q.id, q)).collect();
    let criteria_index: BTreeMap<i64, &Criterion> = criteria.iter().map(|c| (c.id, c)).collect();

    let mut grouped: BTreeMap<i64, Vec<QuestionResult>> = BTreeMap::new();
    for score in scores {
        let Some(question) = question_index.get(&score.question_id) else {
            continue;
        };
        if !criteria_index.contains_key(&question.criteria_id) {
            continue;
        }
        grouped
            .entry(question.criteria_id)
            .or_default()
            .push(QuestionResult {
                question_id: question.id,
                question_text: question.question_text.clone(),
                score_value: score.score_value,
            });
    }

    grouped
        .into_iter()
        .map(|(criteria_id, questions)| {
            let sum: i64 = questions.iter().map(|q| i64::from(q.score_value)).sum();
            CriterionResult {
                criteria_id,
                criteria_name: criteria_index
                    .get(&criteria_id)
                    .map(|c| c.criteria_name.clone())
                    .unwrap_or_default(),
                average: round2(sum as f64 / questions.len() as f64),
                questions,
            }
        })
        .collect()
}

pub async fn evaluation_detail(
    service: &EvaluationService,
    evaluation_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current) = RequireJWT::extract_student(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let storage = service.get_storage(request);

    let (evaluation, student_name, teacher_name, subject_label) =
        match storage.get_evaluation_display(evaluation_id).await {
            Ok(Some(found)) => found,
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::EvaluationNotFound,
                    "评价不存在",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询评价失败: {e}"),
                    )),
                );
            }
        };

    // 普通学生只能查看自己的评价
    let is_owner = evaluation.student_id == current.id;
    if !current.role.is_admin() && !is_owner {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "无权查看该评价",
        )));
    }

    let scores = match storage.get_scores_for_evaluation(evaluation.id).await {
        Ok(scores) => scores,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询得分失败: {e}"),
                )),
            );
        }
    };

    // 包含已停用题目，历史评价仍要能展示
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

    let rows: Vec<(i64, i32)> = scores.iter().map(|s| (s.question_id, s.score_value)).collect();
    let criteria_results = build_criterion_results(&scores, &questions, &criteria);

    let display_student_name = if evaluation.is_anonymous && !current.role.is_admin() && !is_owner {
        "Anonymous".to_string()
    } else {
        student_name
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        EvaluationDetailResponse {
            id: evaluation.id,
            student_name: display_student_name,
            teacher_name,
            subject_label,
            is_anonymous: evaluation.is_anonymous,
            comments: evaluation.comments,
            date_evaluated: evaluation.date_evaluated,
            overall_average: overall_average(&rows),
            criteria: criteria_results,
        },
        "查询成功",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(question_id: i64, value: i32) -> Score {
        Score {
            id: question_id,
            evaluation_id: 1,
            question_id,
            score_value: value,
        }
    }

    fn question(id: i64, criteria_id: i64, text: &str) -> Question {
        Question {
            id,
            criteria_id,
            question_text: text.to_string(),
            display_order: id as i32,
            is_active: true,
        }
    }

    fn criterion(id: i64, name: &str) -> Criterion {
        Criterion {
            id,
            criteria_name: name.to_string(),
            display_order: id as i32,
        }
    }

    #[test]
    fn test_build_criterion_results() {
        let scores = vec![score(1, 5), score(2, 4), score(3, 2)];
        let questions = vec![
            question(1, 10, "讲解是否清晰"),
            question(2, 10, "备课是否充分"),
            question(3, 20, "是否尊重学生"),
        ];
        let criteria = vec![criterion(10, "教学能力"), criterion(20, "师德师风")];

        let result = build_criterion_results(&scores, &questions, &criteria);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].criteria_id, 10);
        assert_eq!(result[0].average, 4.5);
        assert_eq!(result[0].questions.len(), 2);
        assert_eq!(result[1].criteria_id, 20);
        assert_eq!(result[1].average, 2.0);
        assert_eq!(result[1].questions[0].question_text, "是否尊重学生");
    }

    #[test]
    fn test_orphan_score_is_skipped() {
        let scores = vec![score(1, 5), score(42, 3)];
        let questions = vec![question(1, 10, "讲解是否清晰")];
        let criteria = vec![criterion(10, "教学能力")];

        let result = build_criterion_results(&scores, &questions, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].questions.len(), 1);
    }
}
