use tracing::{error, info};
use webblog_api_types::{Comment, CommentCreateRequest, Post};

use crate::{
    domain::{
        auth::AuthContext,
        format::{comments_heading, format_timestamp},
        routes::Route,
    },
    infra::client::ApiClient,
    presentation::views::{
        CommentView, NoticeTemplate, NoticeView, PostDetailTemplate, PostDetailView,
        TemplateRenderError, render_template,
    },
};

use super::{Outcome, PageContext, report_failure};

pub const CONFIRM_DELETE_COMMENT: &str = "Are you sure you want to delete this comment?";

/// A single post with its comment thread at `/post/:id`.
#[derive(Debug)]
pub struct PostDetailPage {
    id: i64,
    post: Option<Post>,
    comments: Vec<Comment>,
    draft: String,
    loading: bool,
}

impl PostDetailPage {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            post: None,
            comments: Vec::new(),
            draft: String::new(),
            loading: true,
        }
    }

    pub async fn mount(api: &ApiClient, id: i64) -> Self {
        let mut page = Self::new(id);
        page.load(api).await;
        page
    }

    /// Fetch the post and its comments side by side; each settles on its own.
    pub async fn load(&mut self, api: &ApiClient) {
        let (post, comments) = tokio::join!(api.get_post(self.id), api.list_comments(self.id));

        match post {
            Ok(post) => self.post = Some(post),
            Err(err) => error!(post_id = self.id, error = %err, "error fetching post"),
        }
        match comments {
            Ok(comments) => self.comments = comments,
            Err(err) => error!(post_id = self.id, error = %err, "error fetching comments"),
        }
        self.loading = false;
    }

    async fn refresh_comments(&mut self, api: &ApiClient) {
        match api.list_comments(self.id).await {
            Ok(comments) => self.comments = comments,
            Err(err) => error!(post_id = self.id, error = %err, "error fetching comments"),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn post(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, content: impl Into<String>) {
        self.draft = content.into();
    }

    /// Anonymous visitors are sent to the login screen before anything is sent.
    pub async fn submit_comment(&mut self, ctx: &PageContext<'_>) -> Outcome {
        if !ctx.auth.is_authenticated() {
            return Outcome::Redirect(Route::Login);
        }
        if self.post.is_none() {
            return Outcome::Unavailable;
        }
        if self.draft.trim().is_empty() {
            return Outcome::Invalid("Comment content is required".to_string());
        }

        let payload = CommentCreateRequest {
            content: self.draft.clone(),
        };
        match ctx.api.create_comment(self.id, &payload).await {
            Ok(()) => {
                self.draft.clear();
                info!(post_id = self.id, "comment created");
                self.refresh_comments(ctx.api).await;
                Outcome::Done
            }
            Err(err) => report_failure(ctx, &err, "Failed to create comment"),
        }
    }

    pub async fn delete_comment(&mut self, ctx: &PageContext<'_>, comment_id: i64) -> Outcome {
        let Some(author_id) = self
            .comments
            .iter()
            .find(|comment| comment.id == comment_id)
            .map(|comment| comment.author_id)
        else {
            return Outcome::Unavailable;
        };
        if !ctx.auth.can_modify(author_id) {
            return Outcome::Unavailable;
        }
        if !ctx.prompt.confirm(CONFIRM_DELETE_COMMENT) {
            return Outcome::Cancelled;
        }

        match ctx.api.delete_comment(comment_id).await {
            Ok(()) => {
                self.comments.retain(|comment| comment.id != comment_id);
                info!(post_id = self.id, comment_id, "comment deleted");
                Outcome::Done
            }
            Err(err) => report_failure(ctx, &err, "Failed to delete comment"),
        }
    }

    pub fn view(&self, auth: &AuthContext) -> Option<PostDetailView> {
        let post = self.post.as_ref()?;
        let comments = self
            .comments
            .iter()
            .map(|comment| CommentView {
                id: comment.id,
                author: comment.author_name().to_string(),
                date: format_timestamp(&comment.created_at),
                content: comment.content.clone(),
                can_delete: auth.can_modify(comment.author_id),
            })
            .collect();

        Some(PostDetailView {
            title: post.title.clone(),
            author: post.author_name().to_string(),
            date: format_timestamp(&post.created_at),
            content: post.content.clone(),
            categories: post.categories.iter().map(|cat| cat.name.clone()).collect(),
            can_edit: auth.can_modify(post.author_id),
            edit_href: Route::EditPost(post.id).to_string(),
            comments_heading: comments_heading(self.comments.len()),
            signed_in: auth.is_authenticated(),
            draft: self.draft.clone(),
            comments,
        })
    }

    pub fn render(&self, auth: &AuthContext) -> Result<String, TemplateRenderError> {
        if self.loading {
            return render_template(&NoticeTemplate {
                view: NoticeView::loading(),
            });
        }
        match self.view(auth) {
            Some(view) => render_template(&PostDetailTemplate { view }),
            None => render_template(&NoticeTemplate {
                view: NoticeView::plain("Post not found"),
            }),
        }
    }
}
