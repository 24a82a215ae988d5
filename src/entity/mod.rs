//! SeaORM entity definitions.
//!
//! Database-facing entities, kept separate from the business entities in the
//! models module. The storage layer runs CRUD against these and converts the
//! results into business entities.

pub mod prelude;

pub mod course_registers;
pub mod courses;
pub mod student_registers;
pub mod students;
pub mod tutor_registers;
pub mod tutors;
