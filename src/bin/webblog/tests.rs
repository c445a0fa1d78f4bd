#![deny(clippy::all, clippy::pedantic)]

use clap::Parser;
use httpmock::MockServer;
use tempfile::NamedTempFile;
use url::Url;
use webblog::{
    application::{app::App, error::AppError, prompt::ScriptedPrompt},
    domain::auth::AuthContext,
    infra::client::ApiClient,
};
use webblog_api_types::{Role, User};

use crate::args::{CategoriesCmd, Cli, Commands, CommentsCmd, PostsCmd};
use crate::handlers::handle;

fn app(server: &MockServer, auth: AuthContext, prompt: ScriptedPrompt) -> App<ScriptedPrompt> {
    let base = Url::parse(&format!("{}/api/", server.base_url())).expect("base");
    let api = ApiClient::new(base, Some("key".into())).expect("client");
    App::new(api, auth, prompt)
}

fn signed_in(id: i64, role: Role) -> AuthContext {
    AuthContext::signed_in(User {
        id,
        name: "Ada".into(),
        email: "ada@example.com".into(),
        role,
        enabled: Some(true),
    })
}

fn tmp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tmp file");
    std::io::Write::write_all(&mut file, contents.as_bytes()).expect("write tmp");
    file
}

#[test]
fn parses_global_flags_after_subcommand() {
    let cli = Cli::parse_from([
        "webblog",
        "posts",
        "delete",
        "4",
        "--yes",
        "--api-url",
        "http://api.test",
    ]);
    assert!(cli.yes);
    assert_eq!(cli.overrides.api_url.as_deref(), Some("http://api.test"));
    assert!(matches!(
        cli.command,
        Commands::Posts(ref args) if matches!(args.action, PostsCmd::Delete { id: 4 })
    ));
}

#[tokio::test]
async fn open_renders_home_with_nav() -> Result<(), AppError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/api/posts");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"id":1,"title":"First","content":"Hello","authorId":2,"author":{"id":2,"name":"Grace"},"createdAt":"2024-01-05T15:04:05"}]"#);
    });

    let mut app = app(&server, AuthContext::anonymous(), ScriptedPrompt::accepting());
    let screen = handle(&mut app, None, Commands::Open { path: "/".into() }).await?;

    assert!(screen.starts_with("WebBlog"));
    assert!(screen.contains("# All Posts"));
    assert!(screen.contains("## First"));
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn create_reads_content_file_and_opens_new_post() -> Result<(), AppError> {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method("POST")
            .path("/api/posts")
            .json_body_includes(r#"{"title":"T","content":"From file"}"#);
        then.status(201)
            .header("content-type", "application/json")
            .body(r#"{"id":9,"title":"T","content":"From file","authorId":1}"#);
    });
    let detail = server.mock(|when, then| {
        when.method("GET").path("/api/posts/9");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"id":9,"title":"T","content":"From file","authorId":1,"author":{"id":1,"name":"Ada"},"createdAt":"2024-01-05T15:04:05"}"#);
    });
    let comments = server.mock(|when, then| {
        when.method("GET").path("/api/comments/post/9");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let file = tmp_file("From file");
    let mut app = app(&server, signed_in(1, Role::User), ScriptedPrompt::accepting());
    let screen = handle(
        &mut app,
        None,
        Commands::Posts(crate::args::PostsArgs {
            action: PostsCmd::Create {
                title: "T".into(),
                content: None,
                content_file: Some(file.path().to_path_buf()),
            },
        }),
    )
    .await?;

    assert!(screen.contains("# T"));
    assert!(screen.contains("Comments (0)"));
    create.assert();
    detail.assert();
    comments.assert();
    Ok(())
}

#[tokio::test]
async fn anonymous_create_is_redirected_to_login() -> Result<(), AppError> {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method("POST").path("/api/posts");
        then.status(201).body("{}");
    });

    let mut app = app(&server, AuthContext::anonymous(), ScriptedPrompt::accepting());
    let screen = handle(
        &mut app,
        None,
        Commands::Posts(crate::args::PostsArgs {
            action: PostsCmd::Create {
                title: "T".into(),
                content: Some("C".into()),
                content_file: None,
            },
        }),
    )
    .await?;

    assert!(screen.contains("Sign in through the WebBlog authentication provider"));
    create.assert_calls(0);
    Ok(())
}

#[tokio::test]
async fn anonymous_comment_is_redirected_to_login() -> Result<(), AppError> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/posts/3");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"id":3,"title":"P","content":"C","authorId":1}"#);
    });
    server.mock(|when, then| {
        when.method("GET").path("/api/comments/post/3");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });
    let create = server.mock(|when, then| {
        when.method("POST").path("/api/comments/post/3");
        then.status(201).body("{}");
    });

    let mut app = app(&server, AuthContext::anonymous(), ScriptedPrompt::accepting());
    let screen = handle(
        &mut app,
        None,
        Commands::Comments(crate::args::CommentsArgs {
            action: CommentsCmd::Add {
                post_id: 3,
                content: Some("hi".into()),
                content_file: None,
            },
        }),
    )
    .await?;

    assert!(screen.contains("Sign in through"));
    create.assert_calls(0);
    Ok(())
}

#[tokio::test]
async fn empty_category_name_is_reported_not_sent() -> Result<(), AppError> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/categories");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"id":1,"name":"rust"}]"#);
    });
    let create = server.mock(|when, then| {
        when.method("POST").path("/api/categories");
        then.status(200).body("{}");
    });

    let mut app = app(&server, signed_in(1, Role::Admin), ScriptedPrompt::accepting());
    let screen = handle(
        &mut app,
        None,
        Commands::Categories(crate::args::CategoriesArgs {
            action: CategoriesCmd::Create { name: String::new() },
        }),
    )
    .await?;

    assert!(screen.contains("- rust"));
    assert_eq!(app.prompt().alerts(), vec!["Category name is required"]);
    create.assert_calls(0);
    Ok(())
}

#[tokio::test]
async fn members_are_sent_home_from_categories() -> Result<(), AppError> {
    let server = MockServer::start();
    let categories = server.mock(|when, then| {
        when.method("GET").path("/api/categories");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });
    server.mock(|when, then| {
        when.method("GET").path("/api/posts");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let mut app = app(&server, signed_in(2, Role::User), ScriptedPrompt::accepting());
    let screen = handle(
        &mut app,
        None,
        Commands::Categories(crate::args::CategoriesArgs {
            action: CategoriesCmd::List,
        }),
    )
    .await?;

    assert!(screen.contains("# All Posts"));
    categories.assert_calls(0);
    Ok(())
}

#[tokio::test]
async fn logout_removes_session_and_shows_anonymous_nav() -> Result<(), AppError> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/posts");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let session = tmp_file("{}");
    let path = session.path().to_path_buf();
    let mut app = app(&server, signed_in(2, Role::User), ScriptedPrompt::accepting());
    let screen = handle(&mut app, Some(&path), Commands::Logout).await?;

    assert!(!path.exists());
    assert!(!app.auth().is_authenticated());
    assert!(screen.contains("Login </login>"));
    assert!(screen.contains("No posts yet. Be the first to create one!"));
    Ok(())
}

#[tokio::test]
async fn unknown_path_is_an_error() {
    let server = MockServer::start();
    let mut app = app(&server, AuthContext::anonymous(), ScriptedPrompt::accepting());
    let err = handle(
        &mut app,
        None,
        Commands::Open {
            path: "/nowhere".into(),
        },
    )
    .await
    .expect_err("unknown route");
    assert!(matches!(err, AppError::Route(_)));
}
