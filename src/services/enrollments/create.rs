use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::enrollments::requests::EnrollRequest;
use crate::models::enrollments::responses::{EnrollFailure, EnrollResult};
use crate::models::{ApiResponse, ErrorCode};

use super::EnrollmentService;

/// 批量选课：学段不匹配的科目逐条报错，重复选课跳过，
/// teacher_id 在创建时由科目冗余写入选课行。
pub async fn enroll(
    service: &EnrollmentService,
    data: EnrollRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current) = RequireJWT::extract_student(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    // student_id 仅管理员可代填
    let target_student_id = match data.student_id {
        Some(id) if id != current.id => {
            if !current.role.is_admin() {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "只能为本人选课",
                )));
            }
            id
        }
        _ => current.id,
    };

    if data.subject_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "科目列表不能为空",
        )));
    }

    let storage = service.get_storage(request);

    let student = match storage.get_student_by_id(target_student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "学生不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生失败: {e}"),
                )),
            );
        }
    };

    let mut enrolled = 0i64;
    let mut skipped = 0i64;
    let mut failures = Vec::new();

    for subject_id in data.subject_ids {
        let subject = match storage.get_subject_by_id(subject_id).await {
            Ok(Some(subject)) => subject,
            Ok(None) => {
                failures.push(EnrollFailure {
                    subject_id,
                    reason: "科目不存在".to_string(),
                });
                continue;
            }
            Err(e) => {
                failures.push(EnrollFailure {
                    subject_id,
                    reason: format!("查询科目失败: {e}"),
                });
                continue;
            }
        };

        // 科目学段必须与学生学段一致
        if subject.level_id != student.level_id {
            failures.push(EnrollFailure {
                subject_id,
                reason: "科目学段与学生学段不一致".to_string(),
            });
            continue;
        }

        match storage
            .create_enrollment(student.id, subject.id, subject.teacher_id)
            .await
        {
            Ok(_) => enrolled += 1,
            // (student_id, subject_id) 唯一索引，重复选课直接跳过
            Err(e) if e.is_unique_violation() => skipped += 1,
            Err(e) => failures.push(EnrollFailure {
                subject_id,
                reason: format!("创建选课失败: {e}"),
            }),
        }
    }

    tracing::info!(
        "Enrollment for student {}: {} enrolled, {} skipped, {} failed",
        student.id,
        enrolled,
        skipped,
        failures.len()
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        EnrollResult {
            enrolled,
            skipped,
            failures,
        },
        "选课处理完成",
    )))
}
