//! Screens and the shell that routes between them.

pub mod app;
pub mod error;
pub mod pages;
pub mod prompt;
