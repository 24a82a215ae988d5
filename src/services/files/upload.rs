use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::FileService;
use crate::config::AppConfig;
use crate::errors::TutorHubError;
use crate::models::auth::UserType;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate_magic_bytes;

#[derive(Debug, serde::Serialize)]
pub struct ProfilePictureResponse {
    pub filepath: String,
}

/// Failures while storing a picture, mapped to HTTP by the callers.
pub(crate) enum PictureError {
    TypeNotAllowed,
    ContentMismatch,
    TooLarge,
    AccountMissing,
    Storage(TutorHubError),
}

/// Drain a multipart payload into text fields plus at most one file taken
/// from `file_field`. The file is size-capped while streaming.
pub(crate) async fn collect_multipart(
    payload: &mut Multipart,
    file_field: &str,
    max_size: usize,
) -> Result<(HashMap<String, String>, Option<(String, Vec<u8>)>), HttpResponse> {
    let mut fields = HashMap::new();
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name == file_field {
            if file.is_some() {
                return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::MultifileUploadNotAllowed,
                    "Only one file can be uploaded at a time",
                )));
            }

            let original_name = content_disposition
                .and_then(|cd| cd.get_filename())
                .map(|s| s.to_string())
                .unwrap_or_default();

            let mut data = Vec::new();
            while let Some(chunk) = field.next().await {
                let bytes = chunk.map_err(|_| {
                    HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
                        ErrorCode::FileUploadFailed,
                        "Malformed multipart payload",
                    ))
                })?;
                if data.len() + bytes.len() > max_size {
                    return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::FileSizeExceeded,
                        "File size exceeds the limit",
                    )));
                }
                data.extend_from_slice(&bytes);
            }

            // an empty file input on a form submits a nameless empty part
            if !original_name.is_empty() && !data.is_empty() {
                file = Some((original_name, data));
            }
        } else {
            let mut value = Vec::new();
            while let Some(chunk) = field.next().await {
                let bytes = chunk.map_err(|_| {
                    HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
                        ErrorCode::FileUploadFailed,
                        "Malformed multipart payload",
                    ))
                })?;
                value.extend_from_slice(&bytes);
            }
            fields.insert(name, String::from_utf8_lossy(&value).to_string());
        }
    }

    Ok((fields, file))
}

/// Validate and persist a profile picture under
/// `{upload.dir}/{students|tutors}/{uid}{ext}` and record the path on the
/// account row.
pub(crate) async fn persist_profile_picture(
    storage: &Arc<dyn Storage>,
    user_type: UserType,
    uid: i64,
    original_name: &str,
    data: &[u8],
) -> Result<String, PictureError> {
    let config = AppConfig::get();

    let extension = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default();

    if !config
        .upload
        .allowed_types
        .iter()
        .any(|t| t.to_lowercase() == extension)
    {
        return Err(PictureError::TypeNotAllowed);
    }

    if !validate_magic_bytes(data, &extension) {
        return Err(PictureError::ContentMismatch);
    }

    if data.len() > config.upload.max_size {
        return Err(PictureError::TooLarge);
    }

    let subdir = match user_type {
        UserType::Student => "students",
        UserType::Tutor => "tutors",
        UserType::Admin => return Err(PictureError::AccountMissing),
    };

    let dir = format!("{}/{}", config.upload.dir, subdir);
    if let Err(e) = fs::create_dir_all(&dir) {
        return Err(PictureError::Storage(TutorHubError::file_operation(
            format!("Failed to create upload directory: {e}"),
        )));
    }

    let filepath = format!("{dir}/{uid}{extension}");
    if let Err(e) = fs::write(&filepath, data) {
        return Err(PictureError::Storage(TutorHubError::file_operation(
            format!("Failed to write file: {e}"),
        )));
    }

    let recorded = match user_type {
        UserType::Student => storage.set_student_profile_picture(uid, &filepath).await,
        UserType::Tutor => storage.set_tutor_profile_picture(uid, &filepath).await,
        UserType::Admin => unreachable!(),
    };

    match recorded {
        Ok(true) => Ok(filepath),
        Ok(false) => {
            let _ = fs::remove_file(&filepath);
            Err(PictureError::AccountMissing)
        }
        Err(e) => {
            let _ = fs::remove_file(&filepath);
            Err(PictureError::Storage(e))
        }
    }
}

pub(crate) fn picture_error_response(err: PictureError) -> HttpResponse {
    match err {
        PictureError::TypeNotAllowed => HttpResponse::UnprocessableEntity().json(
            ApiResponse::error_empty(ErrorCode::FileTypeNotAllowed, "File type not allowed"),
        ),
        PictureError::ContentMismatch => {
            HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                ErrorCode::FileTypeNotAllowed,
                "File content does not match its extension",
            ))
        }
        PictureError::TooLarge => HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileSizeExceeded,
            "File size exceeds the limit",
        )),
        PictureError::AccountMissing => HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::AccountNotFound, "No such account"),
        ),
        PictureError::Storage(e) => {
            tracing::error!("Profile picture upload failed: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::FileUploadFailed,
                format!("Failed to store profile picture: {e}"),
            ))
        }
    }
}

/// POST /utils/file: multipart form with `user_type`, `uid` and a
/// `profile_picture` file part. Called unauthenticated from the signup flow.
pub async fn handle_upload(
    service: &FileService,
    req: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();

    let (fields, file) =
        match collect_multipart(&mut payload, "profile_picture", config.upload.max_size).await {
            Ok(parts) => parts,
            Err(response) => return Ok(response),
        };

    let Some(user_type) = fields
        .get("user_type")
        .and_then(|s| s.parse::<UserType>().ok())
        .filter(|t| *t != UserType::Admin)
    else {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Invalid user type specified",
        )));
    };

    let Some(uid) = fields.get("uid").and_then(|s| s.parse::<i64>().ok()) else {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Invalid uid specified",
        )));
    };

    let Some((original_name, data)) = file else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "No file found in upload payload",
        )));
    };

    let storage = service.get_storage(req);

    match persist_profile_picture(&storage, user_type, uid, &original_name, &data).await {
        Ok(filepath) => Ok(HttpResponse::Created().json(ApiResponse::success(
            ProfilePictureResponse { filepath },
            "Profile picture uploaded successfully",
        ))),
        Err(e) => Ok(picture_error_response(e)),
    }
}
