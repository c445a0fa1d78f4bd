#![deny(clippy::all, clippy::pedantic)]

use std::path::Path;

use webblog::{
    application::{
        app::{App, Page},
        error::AppError,
        pages::{HomePage, Outcome, PostDetailPage},
        prompt::Prompt,
    },
    domain::routes::Route,
    infra::session,
};

use crate::args::{CategoriesCmd, Commands, CommentsCmd, PostsCmd};
use crate::io::{read_opt_value, read_value};

type Screen = (Route, Page);

/// Run one command and return the rendered screen it ends on.
pub async fn handle<P: Prompt>(
    app: &mut App<P>,
    session_file: Option<&Path>,
    command: Commands,
) -> Result<String, AppError> {
    let (_, page) = match command {
        Commands::Open { path } => app.open(path.parse::<Route>()?).await,
        Commands::Posts(cmd) => posts(app, cmd.action).await?,
        Commands::Comments(cmd) => comments(app, cmd.action).await?,
        Commands::Categories(cmd) => categories(app, cmd.action).await?,
        Commands::Profile => app.open(Route::Profile).await,
        Commands::Admin => app.open(Route::Admin).await,
        Commands::Logout => {
            session::clear(session_file).await?;
            let route = app.logout();
            app.open(route).await
        }
    };

    Ok(app.render(&page)?)
}

/// Surface outcomes the page did not already show to the user.
fn announce<P: Prompt>(app: &App<P>, outcome: &Outcome) {
    match outcome {
        Outcome::Invalid(message) => app.prompt().alert(message),
        Outcome::Unavailable => app.prompt().alert("That action is not available here."),
        Outcome::Done | Outcome::Cancelled | Outcome::Redirect(_) | Outcome::Failed(_) => {}
    }
}

async fn posts<P: Prompt>(app: &App<P>, cmd: PostsCmd) -> Result<Screen, AppError> {
    let screen = match cmd {
        PostsCmd::List => app.open(Route::Home).await,
        PostsCmd::Show { id } => app.open(Route::PostDetail(id)).await,
        PostsCmd::Create {
            title,
            content,
            content_file,
        } => {
            let content = read_value(content, content_file).await?;
            let mut page = match app.open(Route::CreatePost).await {
                (_, Page::CreatePost(page)) => page,
                other => return Ok(other),
            };
            page.set_title(title);
            page.set_content(content);
            let outcome = page.submit(&app.context()).await;
            announce(app, &outcome);
            app.follow((Route::CreatePost, Page::CreatePost(page)), &outcome)
                .await
        }
        PostsCmd::Edit {
            id,
            title,
            content,
            content_file,
        } => {
            let content = read_opt_value(content, content_file).await?;
            let mut page = match app.open(Route::EditPost(id)).await {
                (_, Page::EditPost(page)) => page,
                other => return Ok(other),
            };
            if let Some(title) = title {
                page.set_title(title);
            }
            if let Some(content) = content {
                page.set_content(content);
            }
            let outcome = page.submit(&app.context()).await;
            announce(app, &outcome);
            app.follow((Route::EditPost(id), Page::EditPost(page)), &outcome)
                .await
        }
        PostsCmd::Delete { id } => {
            let mut page = HomePage::mount(app.api()).await;
            let outcome = page.delete_post(&app.context(), id).await;
            announce(app, &outcome);
            (Route::Home, Page::Home(page))
        }
    };
    Ok(screen)
}

async fn comments<P: Prompt>(app: &App<P>, cmd: CommentsCmd) -> Result<Screen, AppError> {
    let screen = match cmd {
        CommentsCmd::Add {
            post_id,
            content,
            content_file,
        } => {
            let content = read_value(content, content_file).await?;
            let mut page = PostDetailPage::mount(app.api(), post_id).await;
            page.set_draft(content);
            let outcome = page.submit_comment(&app.context()).await;
            announce(app, &outcome);
            app.follow(
                (Route::PostDetail(post_id), Page::PostDetail(page)),
                &outcome,
            )
            .await
        }
        CommentsCmd::Delete {
            post_id,
            comment_id,
        } => {
            let mut page = PostDetailPage::mount(app.api(), post_id).await;
            let outcome = page.delete_comment(&app.context(), comment_id).await;
            announce(app, &outcome);
            (Route::PostDetail(post_id), Page::PostDetail(page))
        }
    };
    Ok(screen)
}

async fn categories<P: Prompt>(app: &App<P>, cmd: CategoriesCmd) -> Result<Screen, AppError> {
    let mut page = match app.open(Route::AdminCategories).await {
        (_, Page::AdminCategories(page)) => page,
        other => return Ok(other),
    };

    let outcome = match cmd {
        CategoriesCmd::List => Outcome::Done,
        CategoriesCmd::Create { name } => {
            page.set_name(name);
            page.submit(&app.context()).await
        }
        CategoriesCmd::Rename { id, name } => match page.begin_edit(id) {
            Outcome::Done => {
                page.set_name(name);
                page.submit(&app.context()).await
            }
            other => other,
        },
        CategoriesCmd::Delete { id } => page.delete(&app.context(), id).await,
    };
    announce(app, &outcome);

    Ok((Route::AdminCategories, Page::AdminCategories(page)))
}
