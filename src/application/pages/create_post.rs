use tracing::info;
use webblog_api_types::PostWriteRequest;

use crate::{
    domain::routes::Route,
    presentation::views::{PostFormTemplate, PostFormView, TemplateRenderError, render_template},
};

use super::{Outcome, PageContext};

/// The authoring form at `/create-post`.
#[derive(Debug, Default)]
pub struct CreatePostPage {
    title: String,
    content: String,
    error: Option<String>,
}

impl CreatePostPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// On success the caller navigates to the new post. Failures stay inline.
    pub async fn submit(&mut self, ctx: &PageContext<'_>) -> Outcome {
        self.error = None;
        if let Some(outcome) = require_fields(&self.title, &self.content) {
            return outcome;
        }

        let payload = PostWriteRequest {
            title: self.title.clone(),
            content: self.content.clone(),
        };
        match ctx.api.create_post(&payload).await {
            Ok(post) => {
                info!(post_id = post.id, "post created");
                Outcome::Redirect(Route::PostDetail(post.id))
            }
            Err(err) => {
                let message = err.user_message("Failed to create post");
                self.error = Some(message.clone());
                Outcome::Failed(message)
            }
        }
    }

    pub fn cancel(&self) -> Outcome {
        Outcome::Redirect(Route::Home)
    }

    pub fn render(&self) -> Result<String, TemplateRenderError> {
        render_template(&PostFormTemplate {
            view: PostFormView {
                heading: "Create New Post".to_string(),
                error: self.error.clone(),
                title: self.title.clone(),
                content: self.content.clone(),
                submit_label: "Create Post".to_string(),
            },
        })
    }
}

/// Title and content are both required form fields.
pub(super) fn require_fields(title: &str, content: &str) -> Option<Outcome> {
    if title.trim().is_empty() {
        return Some(Outcome::Invalid("Title is required".to_string()));
    }
    if content.trim().is_empty() {
        return Some(Outcome::Invalid("Content is required".to_string()));
    }
    None
}
