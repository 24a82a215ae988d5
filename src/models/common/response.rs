use serde::{Deserialize, Serialize};

/// Business error codes carried inside the response envelope, alongside the
/// HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // generic
    BadRequest = 40000,
    Unauthorized = 40100,
    AuthFailed = 40101,
    TokenRevoked = 40102,
    Forbidden = 40300,
    NotFound = 40400,
    ValidationFailed = 42200,
    InternalServerError = 50000,

    // accounts
    UserNameInvalid = 41001,
    UserEmailInvalid = 41002,
    UserPasswordInvalid = 41003,
    UserAgeInvalid = 41004,
    AccountAlreadyExists = 41005,
    AccountNotFound = 41006,
    AccountCreationFailed = 41007,

    // courses
    CourseNotFound = 42001,
    CourseCreationFailed = 42002,

    // course registers and enrollment
    RegisterNotFound = 43001,
    RegisterNameTaken = 43002,
    RegisterHasStudents = 43003,
    AlreadyEnrolled = 43004,
    EnrollmentNotFound = 43005,
    EnrollmentFailed = 43006,

    // profile pictures
    FileUploadFailed = 44001,
    FileTypeNotAllowed = 44002,
    FileSizeExceeded = 44003,
    FileNotFound = 44004,
    MultifileUploadNotAllowed = 44005,
}

// Unified API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let resp = ApiResponse::success(5, "ok");
        assert_eq!(resp.code, 0);
        assert_eq!(resp.data, Some(5));
        assert_eq!(resp.message, "ok");
    }

    #[test]
    fn test_error_envelope_skips_data() {
        let resp = ApiResponse::error_empty(ErrorCode::NotFound, "missing");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["code"], 40400);
        assert!(json.get("data").is_none());
    }
}
