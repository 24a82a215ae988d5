//! Unified error handling.
//!
//! Error variants are generated by a macro so every variant carries a stable
//! code and a type name alongside its message.

use std::fmt;

/// Defines the crate error enum.
///
/// Generates:
/// - the enum definition
/// - code() - stable error code
/// - error_type() - human readable type name
/// - message() - error detail
/// - snake_case convenience constructors
macro_rules! define_tutorhub_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum TutorHubError {
            $($variant(String),)*
        }

        impl TutorHubError {
            pub fn code(&self) -> &'static str {
                match self {
                    $(TutorHubError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(TutorHubError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(TutorHubError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl TutorHubError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        TutorHubError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_tutorhub_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    DuplicateRecord("E010", "Duplicate Record"),
    DateParse("E011", "Date Parse Error"),
    Authentication("E012", "Authentication Error"),
    Authorization("E013", "Authorization Error"),
    TemplateRender("E014", "Template Render Error"),
}

impl TutorHubError {
    /// Colored output for development builds.
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TutorHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TutorHubError {}

impl From<sea_orm::DbErr> for TutorHubError {
    fn from(err: sea_orm::DbErr) -> Self {
        TutorHubError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for TutorHubError {
    fn from(err: std::io::Error) -> Self {
        TutorHubError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TutorHubError {
    fn from(err: serde_json::Error) -> Self {
        TutorHubError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for TutorHubError {
    fn from(err: chrono::ParseError) -> Self {
        TutorHubError::DateParse(err.to_string())
    }
}

impl From<askama::Error> for TutorHubError {
    fn from(err: askama::Error) -> Self {
        TutorHubError::TemplateRender(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TutorHubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TutorHubError::cache_connection("test").code(), "E001");
        assert_eq!(TutorHubError::database_config("test").code(), "E003");
        assert_eq!(TutorHubError::validation("test").code(), "E007");
        assert_eq!(TutorHubError::authentication("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            TutorHubError::duplicate_record("test").error_type(),
            "Duplicate Record"
        );
        assert_eq!(
            TutorHubError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = TutorHubError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = TutorHubError::not_found("no such course");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("no such course"));
    }
}
