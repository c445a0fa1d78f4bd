//! Text presentation: view models, askama templates and the shared components.

pub mod components;
pub mod views;
