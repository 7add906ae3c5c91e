use std::collections::BTreeSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::evaluations::requests::{NewEvaluation, QuestionScore, SubmitEvaluationRequest};
use crate::models::evaluations::responses::SubmitEvaluationResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_comments;

use super::{EvaluationService, DUPLICATE_POLICY};

/// 提交的得分必须恰好覆盖全部启用题目，且每项都在 1-5 区间。
pub fn validate_scores(
    scores: &[QuestionScore],
    active_question_ids: &BTreeSet<i64>,
) -> Result<(), String> {
    let mut seen = BTreeSet::new();

    for score in scores {
        if !active_question_ids.contains(&score.question_id) {
            return Err(format!("题目 {} 不存在或已停用", score.question_id));
        }
        if !seen.insert(score.question_id) {
            return Err(format!("题目 {} 重复打分", score.question_id));
        }
        if !(1..=5).contains(&score.score_value) {
            return Err(format!(
                "题目 {} 的评分 {} 超出 1-5 区间",
                score.question_id, score.score_value
            ));
        }
    }

    if seen.len() != active_question_ids.len() {
        let missing = active_question_ids.difference(&seen).count();
        return Err(format!("尚有 {missing} 道题目未打分"));
    }

    Ok(())
}

pub async fn submit(
    service: &EvaluationService,
    data: SubmitEvaluationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current) = RequireJWT::extract_student(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    // student_id 仅管理员可代填
    let student_id = match data.student_id {
        Some(id) if id != current.id => {
            if !current.role.is_admin() {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "只能以本人身份提交评价",
                )));
            }
            id
        }
        _ => current.id,
    };

    let storage = service.get_storage(request);

    // 目标校验：学生、教师、科目任一缺失都按目标不存在处理
    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EvaluationTargetNotFound,
                "学生不存在",
            )));
        }
        Err(e) => return Ok(internal(format!("查询学生失败: {e}"))),
    }

    // 在职校验只在资格查询做，提交按选课记录判定
    match storage.get_teacher_by_id(data.teacher_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EvaluationTargetNotFound,
                "教师不存在",
            )));
        }
        Err(e) => return Ok(internal(format!("查询教师失败: {e}"))),
    }

    match storage.get_subject_by_id(data.subject_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EvaluationTargetNotFound,
                "科目不存在",
            )));
        }
        Err(e) => return Ok(internal(format!("查询科目失败: {e}"))),
    }

    // 必须存在对应 (学生, 教师, 科目) 选课
    match storage
        .exists_enrollment(student_id, data.teacher_id, data.subject_id)
        .await
    {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::EvaluationNotEnrolled,
                "未选修该教师的该科目，不能评价",
            )));
        }
        Err(e) => return Ok(internal(format!("查询选课失败: {e}"))),
    }

    // 重复提交检查
    let since = DUPLICATE_POLICY.since_timestamp(chrono::Utc::now());
    match storage
        .exists_evaluation_since(student_id, data.teacher_id, data.subject_id, since)
        .await
    {
        Ok(false) => {}
        Ok(true) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EvaluationAlreadySubmitted,
                "已评价过该教师的该科目",
            )));
        }
        Err(e) => return Ok(internal(format!("查询评价记录失败: {e}"))),
    }

    if let Err(msg) = validate_comments(data.comments.as_deref()) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::EvaluationCommentTooLong,
            msg,
        )));
    }

    let active_questions = match storage.list_questions(true).await {
        Ok(questions) => questions,
        Err(e) => return Ok(internal(format!("查询题目失败: {e}"))),
    };
    let active_ids: BTreeSet<i64> = active_questions.iter().map(|q| q.id).collect();

    if let Err(msg) = validate_scores(&data.scores, &active_ids) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::EvaluationScoresInvalid,
            msg,
        )));
    }

    let new = NewEvaluation {
        student_id,
        teacher_id: data.teacher_id,
        subject_id: data.subject_id,
        is_anonymous: data.is_anonymous,
        comments: data.comments,
        scores: data.scores,
    };

    match storage.create_evaluation_with_scores(new).await {
        Ok(evaluation) => {
            tracing::info!(
                "Evaluation {} submitted: student {} -> teacher {} / subject {}",
                evaluation.id,
                student_id,
                data.teacher_id,
                data.subject_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SubmitEvaluationResponse {
                    evaluation_id: evaluation.id,
                    date_evaluated: evaluation.date_evaluated,
                },
                "评价提交成功",
            )))
        }
        // 唯一索引兜底：并发提交时后到的一笔按重复处理
        Err(e) if e.is_unique_violation() => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EvaluationAlreadySubmitted,
                "已评价过该教师的该科目",
            )))
        }
        Err(e) => Ok(internal(format!("保存评价失败: {e}"))),
    }
}

fn internal(message: String) -> HttpResponse {
    HttpResponse::InternalServerError()
        .json(ApiResponse::error_empty(ErrorCode::InternalServerError, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(question_id: i64, value: i32) -> QuestionScore {
        QuestionScore {
            question_id,
            score_value: value,
        }
    }

    fn active(ids: &[i64]) -> BTreeSet<i64> {
        ids.iter().copied().collect()
    }

    #[test]
    fn test_valid_scores() {
        let scores = vec![score(1, 5), score(2, 1), score(3, 3)];
        assert!(validate_scores(&scores, &active(&[1, 2, 3])).is_ok());
    }

    #[test]
    fn test_missing_question_rejected() {
        let scores = vec![score(1, 5)];
        let err = validate_scores(&scores, &active(&[1, 2])).unwrap_err();
        assert!(err.contains("未打分"));
    }

    #[test]
    fn test_unknown_question_rejected() {
        let scores = vec![score(1, 5), score(99, 3)];
        let err = validate_scores(&scores, &active(&[1])).unwrap_err();
        assert!(err.contains("99"));
    }

    #[test]
    fn test_duplicate_question_rejected() {
        let scores = vec![score(1, 5), score(1, 4)];
        let err = validate_scores(&scores, &active(&[1])).unwrap_err();
        assert!(err.contains("重复"));
    }

    #[test]
    fn test_out_of_range_score_rejected() {
        for bad in [0, 6, -1] {
            let scores = vec![score(1, bad)];
            assert!(validate_scores(&scores, &active(&[1])).is_err());
        }
    }

    #[test]
    fn test_empty_scores_with_no_active_questions() {
        // 没有启用题目时空提交也算完整
        assert!(validate_scores(&[], &active(&[])).is_ok());
    }
}
