pub mod auth;
pub mod enrollments;
pub mod evaluations;
pub mod reference;
pub mod students;
pub mod subjects;
pub mod teachers;

pub use auth::AuthService;
pub use enrollments::EnrollmentService;
pub use evaluations::EvaluationService;
pub use reference::ReferenceService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use teachers::TeacherService;
