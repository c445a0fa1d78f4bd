//! Infrastructure adapters: REST client, session file, telemetry.

pub mod client;
pub mod error;
pub mod session;
pub mod telemetry;
