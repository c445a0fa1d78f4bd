//! webblog: terminal client for the WebBlog REST API.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod handlers;
mod io;

use std::process;

use clap::Parser;
use tracing::error;
use webblog::{
    application::{app::App, error::AppError, prompt::TerminalPrompt},
    config,
    domain::auth::AuthContext,
    infra::{client::ApiClient, session, telemetry},
};

use args::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        error!(error = %error, "webblog failed");
        eprintln!("webblog: {error}");
        process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let settings = config::load(&cli.overrides)?;
    telemetry::init(&settings.logging)?;

    let session_file = settings.auth.session_file.as_deref();
    let (token, auth) = match session::load(session_file).await? {
        Some(session) => (Some(session.token), AuthContext::signed_in(session.user)),
        None => (None, AuthContext::anonymous()),
    };

    let api = ApiClient::new(settings.api.base_url.clone(), token)?;
    let mut app = App::new(api, auth, TerminalPrompt::new(cli.yes));

    let screen = handlers::handle(&mut app, session_file, cli.command).await?;
    println!("{screen}");
    Ok(())
}

#[cfg(test)]
mod tests;
