//! webblog: terminal client for the WebBlog REST API.
//!
//! Screens fetch JSON through [`infra::client::ApiClient`], keep local state in
//! [`application::pages`], and render as text through [`presentation`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
