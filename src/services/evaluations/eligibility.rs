use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::evaluations::responses::{EligiblePair, EligiblePairsResponse};
use crate::models::{ApiResponse, ErrorCode};

use super::EvaluationService;

/// 选课组合减去已评价组合，保持选课顺序
pub fn available_pairs(
    enrolled: Vec<EligiblePair>,
    evaluated: &[(i64, i64)],
) -> Vec<EligiblePair> {
    let evaluated: HashSet<(i64, i64)> = evaluated.iter().copied().collect();
    enrolled
        .into_iter()
        .filter(|pair| !evaluated.contains(&(pair.teacher_id, pair.subject_id)))
        .collect()
}

pub async fn eligible_pairs(
    service: &EvaluationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current) = RequireJWT::extract_student(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let storage = service.get_storage(request);

    let enrolled = match storage.list_active_enrollment_pairs(current.id).await {
        Ok(pairs) => pairs,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询选课失败: {e}"),
                )),
            );
        }
    };

    let evaluated = match storage.list_evaluated_pairs(current.id).await {
        Ok(pairs) => pairs,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询已评价记录失败: {e}"),
                )),
            );
        }
    };

    let pairs = available_pairs(enrolled, &evaluated);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        EligiblePairsResponse { items: pairs },
        "查询成功",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(teacher_id: i64, subject_id: i64) -> EligiblePair {
        EligiblePair {
            teacher_id,
            subject_id,
            teacher_name: format!("T{teacher_id}"),
            subject_label: format!("S{subject_id}"),
        }
    }

    #[test]
    fn test_available_pairs_removes_evaluated() {
        let enrolled = vec![pair(1, 10), pair(2, 20), pair(1, 30)];
        let evaluated = vec![(2, 20)];

        let result = available_pairs(enrolled, &evaluated);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], pair(1, 10));
        assert_eq!(result[1], pair(1, 30));
    }

    #[test]
    fn test_available_pairs_all_evaluated_is_empty() {
        let enrolled = vec![pair(1, 10)];
        let evaluated = vec![(1, 10)];
        assert!(available_pairs(enrolled, &evaluated).is_empty());
    }

    #[test]
    fn test_available_pairs_no_enrollments() {
        assert!(available_pairs(Vec::new(), &[(1, 10)]).is_empty());
    }
}
