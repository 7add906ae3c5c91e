pub mod auth;

pub mod students;

pub mod teachers;

pub mod subjects;

pub mod enrollments;

pub mod evaluations;

pub mod reference;

pub mod system;

pub use auth::configure_auth_routes;
pub use enrollments::configure_enrollment_routes;
pub use evaluations::configure_evaluation_routes;
pub use reference::configure_reference_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use system::configure_system_routes;
pub use teachers::configure_teacher_routes;
