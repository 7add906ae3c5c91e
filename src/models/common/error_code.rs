//! 业务错误码
//!
//! 0 表示成功；4xx/5xx 与 HTTP 语义对齐；1000 以上按领域分段。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    RateLimitExceeded = 429,
    InternalServerError = 500,

    // 认证 1xxx
    InvalidCredentials = 1001,
    TokenExpired = 1002,
    TokenInvalid = 1003,

    // 学生 2xxx
    StudentNotFound = 2001,
    StudentAlreadyExists = 2002,
    StudentEmailInvalid = 2003,
    StudentPasswordWeak = 2004,
    StudentCreationFailed = 2005,
    CanNotDeleteCurrentStudent = 2006,

    // 教师 3xxx
    TeacherNotFound = 3001,
    TeacherAlreadyExists = 3002,
    TeacherInUse = 3003,

    // 科目 4xxx
    SubjectNotFound = 4001,
    SubjectAlreadyExists = 4002,
    SubjectInUse = 4003,

    // 选课 5xxx
    EnrollmentNotFound = 5001,
    EnrollmentLevelMismatch = 5002,
    EnrollmentAlreadyExists = 5003,

    // 评价 6xxx
    EvaluationNotFound = 6001,
    EvaluationTargetNotFound = 6002,
    EvaluationNotEnrolled = 6003,
    EvaluationAlreadySubmitted = 6004,
    EvaluationScoresInvalid = 6005,
    EvaluationCommentTooLong = 6006,

    // 问卷 7xxx
    LevelNotFound = 7001,
    CriterionNotFound = 7002,
    QuestionNotFound = 7003,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 401);
        assert_eq!(ErrorCode::EvaluationAlreadySubmitted as i32, 6004);
    }
}
