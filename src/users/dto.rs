use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::users::repo::User;

/// Public view of a user; the password hash never leaves the repo layer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<User> for UserProfile {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Partial profile update; absent fields are left untouched.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_uses_camel_case_and_omits_hash() {
        let profile = UserProfile::from(User {
            id: Uuid::new_v4(),
            email: "a@x.com".into(),
            password_hash: "$argon2id$hidden".into(),
            first_name: Some("Saif".into()),
            last_name: None,
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        });
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("firstName"));
        assert!(json.contains("createdAt"));
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2id"));
    }

    #[test]
    fn edit_request_accepts_partial_bodies() {
        let req: EditUserRequest =
            serde_json::from_str(r#"{"lastName":"Abdulkarim"}"#).expect("partial body");
        assert!(req.email.is_none());
        assert!(req.first_name.is_none());
        assert_eq!(req.last_name.as_deref(), Some("Abdulkarim"));

        let empty: EditUserRequest = serde_json::from_str("{}").expect("empty body");
        assert!(empty.email.is_none());
    }
}
