use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TutorService;
use crate::errors::TutorHubError;
use crate::models::{
    ApiResponse, ErrorCode,
    tutors::{requests::CreateTutorRequest, responses::TutorResponse},
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_age, validate_email, validate_password_simple, validate_username};

pub async fn create_tutor(
    service: &TutorService,
    mut tutor_data: CreateTutorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_username(&tutor_data.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    if let Err(msg) = validate_email(&tutor_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    if let Err(msg) = validate_age(tutor_data.age) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserAgeInvalid, msg)));
    }

    if let Err(msg) = validate_password_simple(&tutor_data.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
    }

    tutor_data.password = match hash_password(&tutor_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    let storage = service.get_storage(request);

    match storage.create_tutor(tutor_data).await {
        Ok(tutor) => Ok(HttpResponse::Created().json(ApiResponse::success(
            TutorResponse { tutor },
            "Tutor created successfully",
        ))),
        Err(TutorHubError::DuplicateRecord(_)) => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AccountAlreadyExists,
                "A tutor with that username or email already exists",
            )))
        }
        Err(e) => {
            let msg = format!("Tutor creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::AccountCreationFailed, msg)))
        }
    }
}
