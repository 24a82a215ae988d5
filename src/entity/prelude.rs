//! Convenience re-exports.

pub use super::course_registers::{
    ActiveModel as CourseRegisterActiveModel, Entity as CourseRegisters,
    Model as CourseRegisterModel,
};
pub use super::courses::{
    ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel,
};
pub use super::student_registers::{
    ActiveModel as StudentRegisterActiveModel, Entity as StudentRegisters,
    Model as StudentRegisterModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::tutor_registers::{
    ActiveModel as TutorRegisterActiveModel, Entity as TutorRegisters,
    Model as TutorRegisterModel,
};
pub use super::tutors::{ActiveModel as TutorActiveModel, Entity as Tutors, Model as TutorModel};
