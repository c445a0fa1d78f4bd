use tracing::{error, info};
use webblog_api_types::Post;

use crate::{
    domain::auth::AuthContext,
    infra::client::ApiClient,
    presentation::{
        components::render_post_card,
        views::{HomeTemplate, HomeView, TemplateRenderError, render_template},
    },
};

use super::{Outcome, PageContext, report_failure};

pub const CONFIRM_DELETE_POST: &str = "Are you sure you want to delete this post?";

/// The post list at `/`.
#[derive(Debug)]
pub struct HomePage {
    posts: Vec<Post>,
    loading: bool,
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            loading: true,
        }
    }

    pub async fn mount(api: &ApiClient) -> Self {
        let mut page = Self::new();
        page.load(api).await;
        page
    }

    /// A failed fetch leaves the list empty.
    pub async fn load(&mut self, api: &ApiClient) {
        match api.list_posts().await {
            Ok(posts) => self.posts = posts,
            Err(err) => error!(error = %err, "error fetching posts"),
        }
        self.loading = false;
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Confirm, delete, then drop the card locally without re-fetching.
    pub async fn delete_post(&mut self, ctx: &PageContext<'_>, post_id: i64) -> Outcome {
        let Some(author_id) = self
            .posts
            .iter()
            .find(|post| post.id == post_id)
            .map(|post| post.author_id)
        else {
            return Outcome::Unavailable;
        };
        if !ctx.auth.can_modify(author_id) {
            return Outcome::Unavailable;
        }
        if !ctx.prompt.confirm(CONFIRM_DELETE_POST) {
            return Outcome::Cancelled;
        }

        match ctx.api.delete_post(post_id).await {
            Ok(()) => {
                self.posts.retain(|post| post.id != post_id);
                info!(post_id, "post deleted");
                Outcome::Done
            }
            Err(err) => report_failure(ctx, &err, "Failed to delete post"),
        }
    }

    pub fn view(&self, auth: &AuthContext) -> Result<HomeView, TemplateRenderError> {
        let cards = self
            .posts
            .iter()
            .map(|post| render_post_card(post, auth))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(HomeView {
            loading: self.loading,
            cards,
            show_create: auth.is_authenticated(),
        })
    }

    pub fn render(&self, auth: &AuthContext) -> Result<String, TemplateRenderError> {
        render_template(&HomeTemplate {
            view: self.view(auth)?,
        })
    }
}
