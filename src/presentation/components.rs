//! NavBar and PostCard: stateless components fed by data plus the auth context.

use webblog_api_types::Post;

use crate::domain::{
    auth::AuthContext,
    format::{format_timestamp, preview},
    routes::Route,
};

use super::views::{
    LinkView, NavBarTemplate, NavBarView, PostCardTemplate, PostCardView, TemplateRenderError,
    render_template,
};

pub const BRAND: &str = "WebBlog";

pub fn nav_bar(auth: &AuthContext) -> NavBarView {
    let mut links = vec![LinkView::new("Home", Route::Home)];
    let greeting = match auth.user() {
        Some(user) => {
            links.push(LinkView::new("Create Post", Route::CreatePost));
            links.push(LinkView::new("Profile", Route::Profile));
            if auth.is_admin() {
                links.push(LinkView::new("Admin", Route::Admin));
            }
            Some(format!("Hello, {}", user.name))
        }
        None => {
            links.push(LinkView::new("Login", Route::Login));
            links.push(LinkView::new("Register", Route::Register));
            None
        }
    };

    NavBarView {
        brand: BRAND.to_string(),
        links,
        greeting,
    }
}

pub fn render_nav_bar(auth: &AuthContext) -> Result<String, TemplateRenderError> {
    render_template(&NavBarTemplate {
        view: nav_bar(auth),
    })
}

pub fn post_card(post: &Post, auth: &AuthContext) -> PostCardView {
    let allowed = auth.can_modify(post.author_id);
    PostCardView {
        id: post.id,
        title: post.title.clone(),
        href: Route::PostDetail(post.id).to_string(),
        author: post.author_name().to_string(),
        date: format_timestamp(&post.created_at),
        preview: preview(&post.content).into_owned(),
        categories: post.categories.iter().map(|cat| cat.name.clone()).collect(),
        can_edit: allowed,
        can_delete: allowed,
        edit_href: Route::EditPost(post.id).to_string(),
    }
}

pub fn render_post_card(post: &Post, auth: &AuthContext) -> Result<String, TemplateRenderError> {
    render_template(&PostCardTemplate {
        view: post_card(post, auth),
    })
}
