use askama::{Error as AskamaError, Template};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) origin: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(origin: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            origin,
            public_message,
            error,
        }
    }
}

/// Render a text template, dropping the blank lines that control tags leave
/// at either end.
pub fn render_template<T: Template>(template: &T) -> Result<String, TemplateRenderError> {
    template
        .render()
        .map(|text| text.trim_matches('\n').to_string())
        .map_err(|err| {
            TemplateRenderError::new(
                "presentation::views::render_template",
                "Template rendering failed",
                err,
            )
        })
}

#[derive(Clone, Debug)]
pub struct LinkView {
    pub label: String,
    pub href: String,
}

impl LinkView {
    pub fn new(label: impl Into<String>, href: impl ToString) -> Self {
        Self {
            label: label.into(),
            href: href.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct NavBarView {
    pub brand: String,
    pub links: Vec<LinkView>,
    pub greeting: Option<String>,
}

#[derive(Template)]
#[template(
    ext = "txt",
    source = r#"{{ view.brand }}
{%- for link in view.links %} | {{ link.label }} <{{ link.href }}>{% endfor %}
{%- if let Some(greeting) = view.greeting %} | {{ greeting }} | [Logout]{% endif %}"#
)]
pub struct NavBarTemplate {
    pub view: NavBarView,
}

#[derive(Clone, Debug)]
pub struct PostCardView {
    pub id: i64,
    pub title: String,
    pub href: String,
    pub author: String,
    pub date: String,
    pub preview: String,
    pub categories: Vec<String>,
    pub can_edit: bool,
    pub can_delete: bool,
    pub edit_href: String,
}

#[derive(Template)]
#[template(
    ext = "txt",
    source = r#"## {{ view.title }}
<{{ view.href }}>
By {{ view.author }} • {{ view.date }}
{{ view.preview }}
{%- if !view.categories.is_empty() %}
Categories: {{ view.categories|join(", ") }}
{%- endif %}
{%- if view.can_edit %}
[Edit] <{{ view.edit_href }}>
{%- if view.can_delete %} [Delete post {{ view.id }}]{% endif %}
{%- endif %}"#
)]
pub struct PostCardTemplate {
    pub view: PostCardView,
}

#[derive(Clone, Debug)]
pub struct LayoutView {
    pub nav: String,
    pub body: String,
}

#[derive(Template)]
#[template(
    ext = "txt",
    source = r#"{{ view.nav }}
================================================================
{{ view.body }}"#
)]
pub struct LayoutTemplate {
    pub view: LayoutView,
}

#[derive(Clone, Debug)]
pub struct NoticeView {
    pub message: String,
    pub hint: Option<LinkView>,
}

impl NoticeView {
    pub fn plain(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: None,
        }
    }

    pub fn loading() -> Self {
        Self::plain("Loading...")
    }

    pub fn not_found() -> Self {
        Self::plain("Page not found")
    }
}

#[derive(Template)]
#[template(
    ext = "txt",
    source = r#"{{ view.message }}
{%- if let Some(hint) = view.hint %}
{{ hint.label }} <{{ hint.href }}>
{%- endif %}"#
)]
pub struct NoticeTemplate {
    pub view: NoticeView,
}

#[derive(Clone, Debug)]
pub struct HomeView {
    pub loading: bool,
    pub cards: Vec<String>,
    pub show_create: bool,
}

#[derive(Template)]
#[template(
    ext = "txt",
    source = r#"{%- if view.loading %}
Loading...
{%- else %}
# All Posts
{%- if view.cards.is_empty() %}
No posts yet. Be the first to create one!
{%- if view.show_create %}
[Create Post] </create-post>
{%- endif %}
{%- else %}
{%- for card in view.cards %}

{{ card }}
{%- endfor %}
{%- endif %}
{%- endif %}"#
)]
pub struct HomeTemplate {
    pub view: HomeView,
}

#[derive(Clone, Debug)]
pub struct CommentView {
    pub id: i64,
    pub author: String,
    pub date: String,
    pub content: String,
    pub can_delete: bool,
}

#[derive(Clone, Debug)]
pub struct PostDetailView {
    pub title: String,
    pub author: String,
    pub date: String,
    pub content: String,
    pub categories: Vec<String>,
    pub can_edit: bool,
    pub edit_href: String,
    pub comments_heading: String,
    pub signed_in: bool,
    pub draft: String,
    pub comments: Vec<CommentView>,
}

#[derive(Template)]
#[template(
    ext = "txt",
    source = r#"# {{ view.title }}
By {{ view.author }} • {{ view.date }}
{%- if view.can_edit %}
[Edit Post] <{{ view.edit_href }}>
{%- endif %}

{{ view.content }}
{%- if !view.categories.is_empty() %}

Categories: {{ view.categories|join(", ") }}
{%- endif %}

## {{ view.comments_heading }}
{%- if view.signed_in %}
> {% if view.draft.is_empty() %}Write a comment...{% else %}{{ view.draft }}{% endif %}
[Add Comment]
{%- else %}
Login </login> to add a comment
{%- endif %}
{%- if view.comments.is_empty() %}
No comments yet. Be the first to comment!
{%- else %}
{%- for comment in view.comments %}

* {{ comment.author }} · {{ comment.date }}
{{ comment.content }}
{%- if comment.can_delete %}
[Delete comment {{ comment.id }}]
{%- endif %}
{%- endfor %}
{%- endif %}"#
)]
pub struct PostDetailTemplate {
    pub view: PostDetailView,
}

#[derive(Clone, Debug)]
pub struct PostFormView {
    pub heading: String,
    pub error: Option<String>,
    pub title: String,
    pub content: String,
    pub submit_label: String,
}

#[derive(Template)]
#[template(
    ext = "txt",
    source = r#"# {{ view.heading }}
{%- if let Some(error) = view.error %}
Error: {{ error }}
{%- endif %}
Title: {{ view.title }}
Content:
{{ view.content }}
[{{ view.submit_label }}] [Cancel]"#
)]
pub struct PostFormTemplate {
    pub view: PostFormView,
}

#[derive(Clone, Debug)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Template)]
#[template(
    ext = "txt",
    source = r#"# User Profile
Name: {{ view.name }}
Email: {{ view.email }}
Role: {{ view.role }}"#
)]
pub struct ProfileTemplate {
    pub view: ProfileView,
}

#[derive(Clone, Debug)]
pub struct AdminCardView {
    pub title: String,
    pub description: String,
    pub href: String,
}

#[derive(Template)]
#[template(
    ext = "txt",
    source = r#"# Admin Dashboard
{%- for card in cards %}

## {{ card.title }}
<{{ card.href }}>
{{ card.description }}
{%- endfor %}"#
)]
pub struct AdminDashboardTemplate {
    pub cards: Vec<AdminCardView>,
}

#[derive(Clone, Debug)]
pub struct CategoryRowView {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct AdminCategoriesView {
    pub loading: bool,
    pub form_heading: String,
    pub name: String,
    pub submit_label: String,
    pub editing: bool,
    pub categories: Vec<CategoryRowView>,
}

#[derive(Template)]
#[template(
    ext = "txt",
    source = r#"{%- if view.loading %}
Loading...
{%- else %}
# Manage Categories
[Back to Dashboard] </admin>

## {{ view.form_heading }}
Category Name: {{ view.name }}
[{{ view.submit_label }}]{% if view.editing %} [Cancel]{% endif %}

## All Categories
{%- if view.categories.is_empty() %}
No categories yet. Create one above!
{%- else %}
{%- for category in view.categories %}
- {{ category.name }} [Edit category {{ category.id }}] [Delete category {{ category.id }}]
{%- endfor %}
{%- endif %}
{%- endif %}"#
)]
pub struct AdminCategoriesTemplate {
    pub view: AdminCategoriesView,
}
