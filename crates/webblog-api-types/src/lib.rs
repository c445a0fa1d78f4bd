//! Request and response shapes exchanged with the WebBlog REST API.
//!
//! Field names follow the backend's camelCase JSON. Timestamps stay as the
//! text the backend sends; formatting for display happens client-side.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Role granted to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Role {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Author summary embedded in posts and comments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthorRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    #[serde(default)]
    pub author: Option<AuthorRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<Category>,
}

impl Post {
    pub fn author_name(&self) -> &str {
        self.author.as_ref().map_or("", |author| author.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub author_id: i64,
    #[serde(default)]
    pub author: Option<AuthorRef>,
    #[serde(default)]
    pub post_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

impl Comment {
    pub fn author_name(&self) -> &str {
        self.author.as_ref().map_or("", |author| author.name.as_str())
    }
}

/// Jackson writes absent collections and timestamps as explicit `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body for both `POST /posts` and `PUT /posts/:id`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PostWriteRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommentCreateRequest {
    pub content: String,
}

/// Body for both `POST /categories` and `PUT /categories/:id`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryWriteRequest {
    pub name: String,
}

/// Error payload returned with non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extract the human-readable message from a raw error body, if any.
    pub fn message_from_slice(bytes: &[u8]) -> Option<String> {
        let body: Self = serde_json::from_slice(bytes).ok()?;
        body.into_message()
    }

    pub fn into_message(self) -> Option<String> {
        self.error
            .filter(|text| !text.is_empty())
            .or(self.message.filter(|text| !text.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_decodes_backend_shape() {
        let raw = r#"{
            "id": 7,
            "title": "Hello",
            "content": "Body",
            "authorId": 3,
            "author": {"id": 3, "name": "Ada", "email": "ada@example.com"},
            "createdAt": "2024-01-05T15:04:05",
            "categories": [{"id": 1, "name": "rust"}]
        }"#;
        let post: Post = serde_json::from_str(raw).expect("decode post");
        assert_eq!(post.author_id, 3);
        assert_eq!(post.author_name(), "Ada");
        assert_eq!(post.categories.len(), 1);
    }

    #[test]
    fn post_tolerates_missing_author_and_categories() {
        let raw = r#"{"id":1,"title":"t","content":"c","authorId":2}"#;
        let post: Post = serde_json::from_str(raw).expect("decode post");
        assert_eq!(post.author_name(), "");
        assert!(post.categories.is_empty());
    }

    #[test]
    fn explicit_nulls_decode_as_empty() {
        let raw = r#"[
            {"id":1,"title":"a","content":"x","authorId":2,"author":null,"createdAt":null,"categories":null},
            {"id":2,"title":"b","content":"y","authorId":2,"createdAt":"2024-01-05T15:04","categories":[]}
        ]"#;
        let posts: Vec<Post> = serde_json::from_str(raw).expect("decode posts");
        assert_eq!(posts.len(), 2);
        assert!(posts[0].categories.is_empty());
        assert_eq!(posts[0].created_at, "");
        assert_eq!(posts[0].author_name(), "");

        let comment: Comment =
            serde_json::from_str(r#"{"id":5,"content":"c","authorId":2,"createdAt":null}"#)
                .expect("decode comment");
        assert_eq!(comment.created_at, "");
    }

    #[test]
    fn role_uses_spring_authority_names() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"name":"Root","email":"root@example.com","role":"ROLE_ADMIN","enabled":true}"#,
        )
        .expect("decode user");
        assert!(user.role.is_admin());
        assert_eq!(user.role.to_string(), "Admin");
    }

    #[test]
    fn error_body_prefers_error_over_message() {
        let text = ErrorBody::message_from_slice(br#"{"error":"Nope","message":"Other"}"#);
        assert_eq!(text.as_deref(), Some("Nope"));

        let text = ErrorBody::message_from_slice(br#"{"message":"Only message"}"#);
        assert_eq!(text.as_deref(), Some("Only message"));

        assert!(ErrorBody::message_from_slice(b"<html>oops</html>").is_none());
        assert!(ErrorBody::message_from_slice(br#"{"error":""}"#).is_none());
    }
}
