//! Application shell: route guards, page mounting and the NavBar layout.

use tracing::{debug, info};

use crate::{
    domain::{auth::AuthContext, routes::Route},
    infra::client::ApiClient,
    presentation::{
        components::render_nav_bar,
        views::{
            LayoutTemplate, LayoutView, LinkView, NoticeTemplate, NoticeView, TemplateRenderError,
            render_template,
        },
    },
};

use super::{
    pages::{
        AdminCategoriesPage, AdminDashboardPage, CreatePostPage, EditPostPage, HomePage, Outcome,
        PageContext, PostDetailPage, UserProfilePage,
    },
    prompt::Prompt,
};

/// A mounted screen.
#[derive(Debug)]
pub enum Page {
    Home(HomePage),
    PostDetail(PostDetailPage),
    CreatePost(CreatePostPage),
    EditPost(EditPostPage),
    Profile(UserProfilePage),
    AdminDashboard(AdminDashboardPage),
    AdminCategories(AdminCategoriesPage),
    Notice(NoticeView),
}

impl Page {
    pub fn render(&self, auth: &AuthContext) -> Result<String, TemplateRenderError> {
        match self {
            Self::Home(page) => page.render(auth),
            Self::PostDetail(page) => page.render(auth),
            Self::CreatePost(page) => page.render(),
            Self::EditPost(page) => page.render(auth),
            Self::Profile(page) => page.render(auth),
            Self::AdminDashboard(page) => page.render(),
            Self::AdminCategories(page) => page.render(),
            Self::Notice(view) => render_template(&NoticeTemplate { view: view.clone() }),
        }
    }
}

pub struct App<P: Prompt> {
    api: ApiClient,
    auth: AuthContext,
    prompt: P,
}

impl<P: Prompt> App<P> {
    pub fn new(api: ApiClient, auth: AuthContext, prompt: P) -> Self {
        Self { api, auth, prompt }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn context(&self) -> PageContext<'_> {
        PageContext {
            api: &self.api,
            auth: &self.auth,
            prompt: &self.prompt,
        }
    }

    /// Apply guards until a route the current user may open is reached.
    pub fn resolve(&self, route: Route) -> Route {
        let mut current = route;
        while let Some(next) = current.redirect_for(&self.auth) {
            debug!(from = %current, to = %next, "route guard redirect");
            current = next;
        }
        current
    }

    /// Resolve guards, then mount the page and run its initial fetches.
    pub async fn open(&self, route: Route) -> (Route, Page) {
        let route = self.resolve(route);
        let page = match route {
            Route::Home => Page::Home(HomePage::mount(&self.api).await),
            Route::PostDetail(id) => Page::PostDetail(PostDetailPage::mount(&self.api, id).await),
            Route::CreatePost => Page::CreatePost(CreatePostPage::new()),
            Route::EditPost(id) => Page::EditPost(EditPostPage::mount(&self.api, id).await),
            Route::Profile => Page::Profile(UserProfilePage),
            Route::Admin => Page::AdminDashboard(AdminDashboardPage),
            Route::AdminCategories => {
                Page::AdminCategories(AdminCategoriesPage::mount(&self.api).await)
            }
            Route::Login => Page::Notice(NoticeView {
                message: "Sign in through the WebBlog authentication provider; this client \
                          picks up the session file it writes."
                    .to_string(),
                hint: Some(LinkView::new("Register", Route::Register)),
            }),
            Route::Register => Page::Notice(NoticeView {
                message: "Accounts are created through the WebBlog authentication provider."
                    .to_string(),
                hint: Some(LinkView::new("Login", Route::Login)),
            }),
            Route::AdminUsers => Page::Notice(NoticeView::not_found()),
        };
        (route, page)
    }

    /// Where to go after an action: redirects open a new page, everything else
    /// keeps the current one.
    pub async fn follow(&self, current: (Route, Page), outcome: &Outcome) -> (Route, Page) {
        match outcome {
            Outcome::Redirect(route) => self.open(*route).await,
            _ => current,
        }
    }

    /// NavBar above the page body.
    pub fn render(&self, page: &Page) -> Result<String, TemplateRenderError> {
        let view = LayoutView {
            nav: render_nav_bar(&self.auth)?,
            body: page.render(&self.auth)?,
        };
        render_template(&LayoutTemplate { view })
    }

    pub fn logout(&mut self) -> Route {
        if let Some(user) = self.auth.user() {
            info!(user_id = user.id, "signed out");
        }
        self.auth.logout();
        Route::Home
    }
}
