use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::middlewares::RequireJWT;
use crate::models::auth::UserType;
use crate::models::{ApiResponse, ErrorCode};

/// Only the account owner or the admin may delete a student.
pub async fn delete_student(
    service: &StudentService,
    id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(session) = RequireJWT::extract_session(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing session",
        )));
    };

    if !session.can_manage(UserType::Student, id) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You are not permitted to delete other accounts",
        )));
    }

    let storage = service.get_storage(request);

    match storage.delete_student(id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AccountNotFound,
            format!("Student {id} does not exist"),
        ))),
        Err(e) => {
            error!("Failed to delete student {}: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to delete student: {e}"),
                )),
            )
        }
    }
}
