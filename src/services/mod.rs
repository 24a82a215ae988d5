pub mod auth;
pub mod course_registers;
pub mod courses;
pub mod files;
pub mod pages;
pub mod students;
pub mod tutors;

pub use auth::AuthService;
pub use course_registers::CourseRegisterService;
pub use courses::CourseService;
pub use files::FileService;
pub use pages::PageService;
pub use students::StudentService;
pub use tutors::TutorService;
