//! Client-side domain rules: who may do what, where screens live, how values display.

pub mod auth;
pub mod format;
pub mod routes;
