use reqwest::Method;
use webblog_api_types::{Post, PostWriteRequest};

use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_json("posts").await
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, ApiError> {
        self.get_json(&format!("posts/{id}")).await
    }

    pub async fn create_post(&self, payload: &PostWriteRequest) -> Result<Post, ApiError> {
        self.send_json(Method::POST, "posts", payload).await
    }

    pub async fn update_post(&self, id: i64, payload: &PostWriteRequest) -> Result<Post, ApiError> {
        self.send_json(Method::PUT, &format!("posts/{id}"), payload)
            .await
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("posts/{id}")).await
    }
}
