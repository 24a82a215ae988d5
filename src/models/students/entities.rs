use serde::{Deserialize, Serialize};

// Student account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_never_serialized() {
        let student = Student {
            id: 1,
            name: "john Phillips".into(),
            username: "student123".into(),
            email: "jfgp111@gmail.com".into(),
            password_hash: "$argon2id$secret".into(),
            age: 11,
            summary: Some("Looking for a tutor".into()),
            profile_picture: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let json = serde_json::to_string(&student).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2id"));
    }
}
