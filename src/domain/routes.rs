//! Screen addresses, mirroring the paths the browser client exposes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::auth::AuthContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    CreatePost,
    EditPost(i64),
    PostDetail(i64),
    Profile,
    Admin,
    AdminUsers,
    AdminCategories,
}

/// Who may open a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Admin,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no screen at `{0}`")]
    Unknown(String),
    #[error("invalid identifier `{value}` in `{path}`")]
    InvalidId { path: String, value: String },
}

impl Route {
    pub fn access(self) -> Access {
        match self {
            Self::Home | Self::Login | Self::Register | Self::PostDetail(_) => Access::Public,
            Self::CreatePost | Self::EditPost(_) | Self::Profile => Access::Authenticated,
            Self::Admin | Self::AdminUsers | Self::AdminCategories => Access::Admin,
        }
    }

    /// Where to send the visitor instead, when `auth` may not open this route.
    pub fn redirect_for(self, auth: &AuthContext) -> Option<Route> {
        match self.access() {
            Access::Public => None,
            Access::Authenticated if !auth.is_authenticated() => Some(Self::Login),
            Access::Admin if !auth.is_authenticated() => Some(Self::Login),
            Access::Admin if !auth.is_admin() => Some(Self::Home),
            Access::Authenticated | Access::Admin => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::Login => f.write_str("/login"),
            Self::Register => f.write_str("/register"),
            Self::CreatePost => f.write_str("/create-post"),
            Self::EditPost(id) => write!(f, "/edit-post/{id}"),
            Self::PostDetail(id) => write!(f, "/post/{id}"),
            Self::Profile => f.write_str("/profile"),
            Self::Admin => f.write_str("/admin"),
            Self::AdminUsers => f.write_str("/admin/users"),
            Self::AdminCategories => f.write_str("/admin/categories"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim().trim_end_matches('/');
        let segments: Vec<&str> = trimmed
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        let parse_id = |value: &str| {
            value.parse::<i64>().map_err(|_| RouteError::InvalidId {
                path: path.to_string(),
                value: value.to_string(),
            })
        };

        match segments.as_slice() {
            [] => Ok(Self::Home),
            ["login"] => Ok(Self::Login),
            ["register"] => Ok(Self::Register),
            ["create-post"] => Ok(Self::CreatePost),
            ["edit-post", id] => Ok(Self::EditPost(parse_id(id)?)),
            ["post", id] => Ok(Self::PostDetail(parse_id(id)?)),
            ["profile"] => Ok(Self::Profile),
            ["admin"] => Ok(Self::Admin),
            ["admin", "users"] => Ok(Self::AdminUsers),
            ["admin", "categories"] => Ok(Self::AdminCategories),
            _ => Err(RouteError::Unknown(path.to_string())),
        }
    }
}
