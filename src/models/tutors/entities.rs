use serde::{Deserialize, Serialize};

// Tutor account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tutor {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)] // never echoed back in JSON responses
    pub password_hash: String,
    pub age: i32,
    pub summary: Option<String>,
    pub profile_picture: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
