use serde::{Deserialize, Serialize};

// Kind of account behind a token
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Student,
    Tutor,
    Admin,
}

impl UserType {
    pub const STUDENT: &'static str = "student";
    pub const TUTOR: &'static str = "tutor";
    pub const ADMIN: &'static str = "admin";
}

impl<'de> Deserialize<'de> for UserType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserType::STUDENT => Ok(UserType::Student),
            UserType::TUTOR => Ok(UserType::Tutor),
            UserType::ADMIN => Ok(UserType::Admin),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid user type: '{s}'. Supported types: student, tutor, admin"
            ))),
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserType::Student => write!(f, "{}", UserType::STUDENT),
            UserType::Tutor => write!(f, "{}", UserType::TUTOR),
            UserType::Admin => write!(f, "{}", UserType::ADMIN),
        }
    }
}

impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserType::Student),
            "tutor" => Ok(UserType::Tutor),
            "admin" => Ok(UserType::Admin),
            _ => Err(format!("Invalid user type: {s}")),
        }
    }
}

/// Authenticated identity stored in request extensions by the JWT
/// middleware. Admin sessions use uid 0 and have no account row.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub uid: i64,
    pub user_type: UserType,
    pub fresh: bool,
    pub jti: String,
}

impl AuthSession {
    pub fn is_admin(&self) -> bool {
        self.user_type == UserType::Admin
    }

    /// Admin, or the owner of the given account of the given type.
    pub fn can_manage(&self, user_type: UserType, uid: i64) -> bool {
        self.is_admin() || (self.user_type == user_type && self.uid == uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_user_type_roundtrip() {
        for (s, t) in [
            ("student", UserType::Student),
            ("tutor", UserType::Tutor),
            ("admin", UserType::Admin),
        ] {
            assert_eq!(UserType::from_str(s).unwrap(), t);
            assert_eq!(t.to_string(), s);
        }
        assert!(UserType::from_str("parent").is_err());
    }

    #[test]
    fn test_can_manage() {
        let admin = AuthSession {
            uid: 0,
            user_type: UserType::Admin,
            fresh: true,
            jti: "a".into(),
        };
        let student = AuthSession {
            uid: 7,
            user_type: UserType::Student,
            fresh: true,
            jti: "b".into(),
        };

        assert!(admin.can_manage(UserType::Tutor, 3));
        assert!(student.can_manage(UserType::Student, 7));
        assert!(!student.can_manage(UserType::Student, 8));
        assert!(!student.can_manage(UserType::Tutor, 7));
    }
}
