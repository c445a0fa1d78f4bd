use tracing::{error, info};
use webblog_api_types::{Post, PostWriteRequest};

use crate::{
    domain::{auth::AuthContext, routes::Route},
    infra::client::ApiClient,
    presentation::views::{
        NoticeTemplate, NoticeView, PostFormTemplate, PostFormView, TemplateRenderError,
        render_template,
    },
};

use super::{Outcome, PageContext, create_post::require_fields};

/// The edit form at `/edit-post/:id`, pre-filled from the stored post.
#[derive(Debug)]
pub struct EditPostPage {
    id: i64,
    post: Option<Post>,
    title: String,
    content: String,
    error: Option<String>,
    loading: bool,
}

impl EditPostPage {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            post: None,
            title: String::new(),
            content: String::new(),
            error: None,
            loading: true,
        }
    }

    pub async fn mount(api: &ApiClient, id: i64) -> Self {
        let mut page = Self::new(id);
        page.load(api).await;
        page
    }

    pub async fn load(&mut self, api: &ApiClient) {
        match api.get_post(self.id).await {
            Ok(post) => {
                self.title.clone_from(&post.title);
                self.content.clone_from(&post.content);
                self.post = Some(post);
            }
            Err(err) => error!(post_id = self.id, error = %err, "error fetching post"),
        }
        self.loading = false;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
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

    fn editable(&self, auth: &AuthContext) -> bool {
        self.post
            .as_ref()
            .is_some_and(|post| auth.can_modify(post.author_id))
    }

    pub async fn submit(&mut self, ctx: &PageContext<'_>) -> Outcome {
        if !self.editable(ctx.auth) {
            return Outcome::Unavailable;
        }
        self.error = None;
        if let Some(outcome) = require_fields(&self.title, &self.content) {
            return outcome;
        }

        let payload = PostWriteRequest {
            title: self.title.clone(),
            content: self.content.clone(),
        };
        match ctx.api.update_post(self.id, &payload).await {
            Ok(post) => {
                info!(post_id = post.id, "post updated");
                Outcome::Redirect(Route::PostDetail(post.id))
            }
            Err(err) => {
                let message = err.user_message("Failed to update post");
                self.error = Some(message.clone());
                Outcome::Failed(message)
            }
        }
    }

    pub fn cancel(&self) -> Outcome {
        Outcome::Redirect(Route::PostDetail(self.id))
    }

    pub fn render(&self, auth: &AuthContext) -> Result<String, TemplateRenderError> {
        let notice = if self.loading {
            Some(NoticeView::loading())
        } else if self.post.is_none() {
            Some(NoticeView::plain("Post not found"))
        } else if !self.editable(auth) {
            Some(NoticeView::plain(
                "You don't have permission to edit this post",
            ))
        } else {
            None
        };
        if let Some(view) = notice {
            return render_template(&NoticeTemplate { view });
        }

        render_template(&PostFormTemplate {
            view: PostFormView {
                heading: "Edit Post".to_string(),
                error: self.error.clone(),
                title: self.title.clone(),
                content: self.content.clone(),
                submit_label: "Update Post".to_string(),
            },
        })
    }
}
