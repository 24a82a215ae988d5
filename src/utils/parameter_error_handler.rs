use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};

use crate::models::{ApiResponse, ErrorCode};

/// Normalize malformed JSON bodies into the standard envelope.
///
/// Deserialization failures map to 422 (the body parsed but did not match
/// the schema); everything else is a plain 400.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let detail = err.to_string();
    let response = match &err {
        JsonPayloadError::Deserialize(_) => HttpResponse::UnprocessableEntity().json(
            ApiResponse::error_empty(ErrorCode::ValidationFailed, detail),
        ),
        _ => HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            detail,
        )),
    };
    InternalError::from_response(err, response).into()
}

/// Normalize malformed query strings into the standard envelope.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        detail,
    ));
    InternalError::from_response(err, response).into()
}
