use tracing::{error, info};
use webblog_api_types::{Category, CategoryWriteRequest};

use crate::{
    infra::client::ApiClient,
    presentation::views::{
        AdminCategoriesTemplate, AdminCategoriesView, CategoryRowView, TemplateRenderError,
        render_template,
    },
};

use super::{Outcome, PageContext, report_failure};

pub const CONFIRM_DELETE_CATEGORY: &str = "Are you sure you want to delete this category?";

/// Category management at `/admin/categories`: one form for create and rename.
#[derive(Debug)]
pub struct AdminCategoriesPage {
    categories: Vec<Category>,
    name: String,
    editing_id: Option<i64>,
    loading: bool,
}

impl Default for AdminCategoriesPage {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminCategoriesPage {
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            name: String::new(),
            editing_id: None,
            loading: true,
        }
    }

    pub async fn mount(api: &ApiClient) -> Self {
        let mut page = Self::new();
        page.load(api).await;
        page
    }

    pub async fn load(&mut self, api: &ApiClient) {
        match api.list_categories().await {
            Ok(categories) => self.categories = categories,
            Err(err) => error!(error = %err, "error fetching categories"),
        }
        self.loading = false;
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Switch the form to rename mode for a listed category.
    pub fn begin_edit(&mut self, id: i64) -> Outcome {
        let Some(category) = self.categories.iter().find(|category| category.id == id) else {
            return Outcome::Unavailable;
        };
        self.name.clone_from(&category.name);
        self.editing_id = Some(id);
        Outcome::Done
    }

    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.name.clear();
    }

    pub async fn submit(&mut self, ctx: &PageContext<'_>) -> Outcome {
        if !ctx.auth.is_admin() {
            return Outcome::Unavailable;
        }
        if self.name.trim().is_empty() {
            return Outcome::Invalid("Category name is required".to_string());
        }

        let payload = CategoryWriteRequest {
            name: self.name.clone(),
        };
        let result = match self.editing_id {
            Some(id) => ctx.api.update_category(id, &payload).await,
            None => ctx.api.create_category(&payload).await,
        };

        match result {
            Ok(()) => {
                info!(editing = ?self.editing_id, name = %self.name, "category saved");
                self.editing_id = None;
                self.name.clear();
                self.load(ctx.api).await;
                Outcome::Done
            }
            Err(err) => report_failure(ctx, &err, "Failed to save category"),
        }
    }

    pub async fn delete(&mut self, ctx: &PageContext<'_>, id: i64) -> Outcome {
        if !ctx.auth.is_admin() || !self.categories.iter().any(|category| category.id == id) {
            return Outcome::Unavailable;
        }
        if !ctx.prompt.confirm(CONFIRM_DELETE_CATEGORY) {
            return Outcome::Cancelled;
        }

        match ctx.api.delete_category(id).await {
            Ok(()) => {
                info!(category_id = id, "category deleted");
                self.load(ctx.api).await;
                Outcome::Done
            }
            Err(err) => report_failure(ctx, &err, "Failed to delete category"),
        }
    }

    pub fn view(&self) -> AdminCategoriesView {
        let editing = self.editing_id.is_some();
        AdminCategoriesView {
            loading: self.loading,
            form_heading: if editing {
                "Edit Category"
            } else {
                "Create New Category"
            }
            .to_string(),
            name: self.name.clone(),
            submit_label: if editing { "Update" } else { "Create" }.to_string(),
            editing,
            categories: self
                .categories
                .iter()
                .map(|category| CategoryRowView {
                    id: category.id,
                    name: category.name.clone(),
                })
                .collect(),
        }
    }

    pub fn render(&self) -> Result<String, TemplateRenderError> {
        render_template(&AdminCategoriesTemplate { view: self.view() })
    }
}
