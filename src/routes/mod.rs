pub mod auth;

pub mod students;

pub mod tutors;

pub mod courses;

pub mod course_registers;

pub mod files;

pub mod pages;

pub mod statics;

pub use auth::configure_auth_routes;
pub use course_registers::configure_course_register_routes;
pub use courses::configure_course_routes;
pub use files::configure_file_routes;
pub use pages::configure_page_routes;
pub use statics::configure_static_routes;
pub use students::configure_student_routes;
pub use tutors::configure_tutor_routes;
