use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TutorService;
use crate::errors::TutorHubError;
use crate::models::{
    ApiResponse, ErrorCode,
    tutors::{requests::UpdateTutorRequest, responses::TutorResponse},
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_username};

/// PUT semantics: update the row when it exists, otherwise create it under
/// the requested id. 200 for updates, 201 for creates.
pub async fn update_tutor(
    service: &TutorService,
    id: i64,
    mut update_data: UpdateTutorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref username) = update_data.username
        && let Err(msg) = validate_username(username)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    if let Some(ref email) = update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    if let Some(password) = update_data.password.take() {
        update_data.password = match hash_password(&password) {
            Ok(hash) => Some(hash),
            Err(e) => {
                return Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Password hashing failed: {e}"),
                    ),
                ));
            }
        };
    }

    let storage = service.get_storage(request);

    match storage.upsert_tutor(id, update_data).await {
        Ok((tutor, created)) => {
            let response = ApiResponse::success(
                TutorResponse { tutor },
                if created {
                    "Tutor created successfully"
                } else {
                    "Tutor updated successfully"
                },
            );
            if created {
                Ok(HttpResponse::Created().json(response))
            } else {
                Ok(HttpResponse::Ok().json(response))
            }
        }
        Err(TutorHubError::Validation(msg)) => Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg))),
        Err(TutorHubError::DuplicateRecord(_)) => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AccountAlreadyExists,
                "A tutor with that username or email already exists",
            )))
        }
        Err(e) => {
            error!("Failed to upsert tutor {}: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to update tutor: {e}"),
                )),
            )
        }
    }
}
