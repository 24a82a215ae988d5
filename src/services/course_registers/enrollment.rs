//! Join-table inserts and deletes: the enrollment model.

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseRegisterService;
use crate::models::course_registers::entities::CourseRegister;
use crate::models::course_registers::responses::{
    CourseRegisterResponse, StudentWithdrawalResponse, TutorWithdrawalResponse,
};
use crate::models::{ApiResponse, ErrorCode};

/// Look up the register or produce the 404/500 response.
async fn fetch_register(
    service: &CourseRegisterService,
    register_id: i64,
    request: &HttpRequest,
) -> Result<CourseRegister, HttpResponse> {
    let storage = service.get_storage(request);
    match storage.get_course_register_by_id(register_id).await {
        Ok(Some(register)) => Ok(register),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RegisterNotFound,
            format!("Course register {register_id} does not exist"),
        ))),
        Err(e) => {
            error!("Course register lookup failed: {}", e);
            Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Course register lookup failed: {e}"),
                )),
            )
        }
    }
}

pub async fn enroll_student(
    service: &CourseRegisterService,
    student_id: i64,
    register_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AccountNotFound,
                format!("Student {student_id} does not exist"),
            )));
        }
        Err(e) => {
            error!("Student lookup failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Student lookup failed: {e}"),
                )),
            );
        }
    };

    let register = match fetch_register(service, register_id, request).await {
        Ok(register) => register,
        Err(response) => return Ok(response),
    };

    match storage.is_student_enrolled(student_id, register_id).await {
        Ok(true) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadyEnrolled,
                format!(
                    "Student {} is already enrolled in register {}",
                    student.id, register.id
                ),
            )));
        }
        Ok(false) => {}
        Err(e) => {
            error!("Enrollment lookup failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EnrollmentFailed,
                    format!("Enrollment lookup failed: {e}"),
                )),
            );
        }
    }

    match storage.enroll_student(student_id, register_id).await {
        Ok(()) => Ok(HttpResponse::Created().json(ApiResponse::success(
            CourseRegisterResponse {
                course_register: register,
            },
            "Student enrolled successfully",
        ))),
        Err(e) => {
            error!(
                "Failed to enroll student {} in register {}: {}",
                student_id, register_id, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EnrollmentFailed,
                    format!("Failed to enroll student: {e}"),
                )),
            )
        }
    }
}

pub async fn withdraw_student(
    service: &CourseRegisterService,
    student_id: i64,
    register_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AccountNotFound,
                format!("Student {student_id} does not exist"),
            )));
        }
        Err(e) => {
            error!("Student lookup failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Student lookup failed: {e}"),
                )),
            );
        }
    };

    let register = match fetch_register(service, register_id, request).await {
        Ok(register) => register,
        Err(response) => return Ok(response),
    };

    match storage.withdraw_student(student_id, register_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentWithdrawalResponse {
                student,
                course_register: register,
            },
            "Student removed from course register",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            format!(
                "Student {student_id} is not enrolled in register {register_id}"
            ),
        ))),
        Err(e) => {
            error!(
                "Failed to withdraw student {} from register {}: {}",
                student_id, register_id, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EnrollmentFailed,
                    format!("Failed to withdraw student: {e}"),
                )),
            )
        }
    }
}

pub async fn enroll_tutor(
    service: &CourseRegisterService,
    tutor_id: i64,
    register_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let tutor = match storage.get_tutor_by_id(tutor_id).await {
        Ok(Some(tutor)) => tutor,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AccountNotFound,
                format!("Tutor {tutor_id} does not exist"),
            )));
        }
        Err(e) => {
            error!("Tutor lookup failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Tutor lookup failed: {e}"),
                )),
            );
        }
    };

    let register = match fetch_register(service, register_id, request).await {
        Ok(register) => register,
        Err(response) => return Ok(response),
    };

    match storage.is_tutor_enrolled(tutor_id, register_id).await {
        Ok(true) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadyEnrolled,
                format!(
                    "Tutor {} is already enrolled in register {}",
                    tutor.id, register.id
                ),
            )));
        }
        Ok(false) => {}
        Err(e) => {
            error!("Enrollment lookup failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EnrollmentFailed,
                    format!("Enrollment lookup failed: {e}"),
                )),
            );
        }
    }

    match storage.enroll_tutor(tutor_id, register_id).await {
        Ok(()) => Ok(HttpResponse::Created().json(ApiResponse::success(
            CourseRegisterResponse {
                course_register: register,
            },
            "Tutor enrolled successfully",
        ))),
        Err(e) => {
            error!(
                "Failed to enroll tutor {} in register {}: {}",
                tutor_id, register_id, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EnrollmentFailed,
                    format!("Failed to enroll tutor: {e}"),
                )),
            )
        }
    }
}

pub async fn withdraw_tutor(
    service: &CourseRegisterService,
    tutor_id: i64,
    register_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let tutor = match storage.get_tutor_by_id(tutor_id).await {
        Ok(Some(tutor)) => tutor,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AccountNotFound,
                format!("Tutor {tutor_id} does not exist"),
            )));
        }
        Err(e) => {
            error!("Tutor lookup failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Tutor lookup failed: {e}"),
                )),
            );
        }
    };

    let register = match fetch_register(service, register_id, request).await {
        Ok(register) => register,
        Err(response) => return Ok(response),
    };

    match storage.withdraw_tutor(tutor_id, register_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TutorWithdrawalResponse {
                tutor,
                course_register: register,
            },
            "Tutor removed from course register",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            format!("Tutor {tutor_id} is not enrolled in register {register_id}"),
        ))),
        Err(e) => {
            error!(
                "Failed to withdraw tutor {} from register {}: {}",
                tutor_id, register_id, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EnrollmentFailed,
                    format!("Failed to withdraw tutor: {e}"),
                )),
            )
        }
    }
}
