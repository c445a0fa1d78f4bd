use crate::{
    domain::routes::Route,
    presentation::views::{AdminCardView, AdminDashboardTemplate, TemplateRenderError, render_template},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct AdminDashboardPage;

impl AdminDashboardPage {
    pub fn cards() -> Vec<AdminCardView> {
        vec![
            AdminCardView {
                title: "Manage Users".to_string(),
                description: "View, edit, and delete users".to_string(),
                href: Route::AdminUsers.to_string(),
            },
            AdminCardView {
                title: "Manage Categories".to_string(),
                description: "Create, edit, and delete categories".to_string(),
                href: Route::AdminCategories.to_string(),
            },
        ]
    }

    pub fn render(self) -> Result<String, TemplateRenderError> {
        render_template(&AdminDashboardTemplate {
            cards: Self::cards(),
        })
    }
}
