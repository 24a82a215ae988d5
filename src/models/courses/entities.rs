use serde::{Deserialize, Serialize};

// Subject offering, e.g. "English, 11+ exam"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub subject_type: String,
    pub test_providers: Option<String>,
    pub tutor_count: i32,
    pub summary: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
