use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::bookmarks::repo::Bookmark;

/// Body for POST /bookmarks. Title and link default to empty so missing
/// fields reach validation (400) instead of a serde rejection.
#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    pub description: Option<String>,
}

/// Body for PATCH /bookmarks/:id; absent fields are left untouched.
#[derive(Debug, Deserialize)]
pub struct EditBookmarkRequest {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(b: Bookmark) -> Self {
        Self {
            id: b.id,
            user_id: b.user_id,
            title: b.title,
            link: b.link,
            description: b.description,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults_missing_fields_to_empty() {
        let req: CreateBookmarkRequest =
            serde_json::from_str(r#"{"link":"https://x"}"#).expect("partial body");
        assert!(req.title.is_empty());
        assert_eq!(req.link, "https://x");
        assert!(req.description.is_none());
    }

    #[test]
    fn edit_request_accepts_single_field() {
        let req: EditBookmarkRequest =
            serde_json::from_str(r#"{"description":"First Bookmark Description"}"#)
                .expect("partial body");
        assert!(req.title.is_none());
        assert!(req.link.is_none());
        assert_eq!(
            req.description.as_deref(),
            Some("First Bookmark Description")
        );
    }

    #[test]
    fn response_uses_camel_case() {
        let json = serde_json::to_string(&BookmarkResponse {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "First Bookmark".into(),
            link: "https://x".into(),
            description: None,
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        })
        .unwrap();
        assert!(json.contains("userId"));
        assert!(json.contains("createdAt"));
        assert!(json.contains("updatedAt"));
    }
}
