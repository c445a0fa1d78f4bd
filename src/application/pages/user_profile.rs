use crate::{
    domain::auth::AuthContext,
    presentation::views::{
        NoticeTemplate, NoticeView, ProfileTemplate, ProfileView, TemplateRenderError,
        render_template,
    },
};

/// Read-only view of the signed-in user's snapshot.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserProfilePage;

impl UserProfilePage {
    pub fn view(auth: &AuthContext) -> Option<ProfileView> {
        auth.user().map(|user| ProfileView {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.label().to_string(),
        })
    }

    pub fn render(self, auth: &AuthContext) -> Result<String, TemplateRenderError> {
        match Self::view(auth) {
            Some(view) => render_template(&ProfileTemplate { view }),
            None => render_template(&NoticeTemplate {
                view: NoticeView::plain("Please login to view your profile"),
            }),
        }
    }
}
