use reqwest::Method;
use webblog_api_types::{Comment, CommentCreateRequest};

use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn list_comments(&self, post_id: i64) -> Result<Vec<Comment>, ApiError> {
        self.get_json(&format!("comments/post/{post_id}")).await
    }

    /// The created comment is not read back; callers re-fetch the thread.
    pub async fn create_comment(
        &self,
        post_id: i64,
        payload: &CommentCreateRequest,
    ) -> Result<(), ApiError> {
        self.send_unit(
            Method::POST,
            &format!("comments/post/{post_id}"),
            Some(payload),
        )
        .await
    }

    pub async fn delete_comment(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("comments/{id}")).await
    }
}
