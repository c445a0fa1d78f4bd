//! Routed screens. Each one owns its fetch/submit state and renders itself.

mod admin_categories;
mod admin_dashboard;
mod create_post;
mod edit_post;
mod home;
mod post_detail;
mod user_profile;

pub use admin_categories::AdminCategoriesPage;
pub use admin_dashboard::AdminDashboardPage;
pub use create_post::CreatePostPage;
pub use edit_post::EditPostPage;
pub use home::HomePage;
pub use post_detail::PostDetailPage;
pub use user_profile::UserProfilePage;

use crate::{
    application::prompt::Prompt,
    domain::{auth::AuthContext, routes::Route},
    infra::client::ApiClient,
};

/// What a page action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    Redirect(Route),
    /// A required field was empty; nothing was sent.
    Invalid(String),
    /// The request failed; carries the text shown to the user.
    Failed(String),
    /// The control for this action is not shown to the current user.
    Unavailable,
}

/// Collaborators every page action needs.
#[derive(Clone, Copy)]
pub struct PageContext<'a> {
    pub api: &'a ApiClient,
    pub auth: &'a AuthContext,
    pub prompt: &'a dyn Prompt,
}

/// Alert the user with the server's text or `fallback`, and report the failure.
fn report_failure(
    ctx: &PageContext<'_>,
    err: &crate::infra::client::ApiError,
    fallback: &str,
) -> Outcome {
    let message = err.user_message(fallback);
    ctx.prompt.alert(&message);
    Outcome::Failed(message)
}
