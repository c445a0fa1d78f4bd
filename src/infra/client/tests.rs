use httpmock::MockServer;
use reqwest::StatusCode;
use url::Url;
use webblog_api_types::{CategoryWriteRequest, CommentCreateRequest, PostWriteRequest};

use super::{ApiClient, ApiError};

fn client(server: &MockServer, token: Option<&str>) -> ApiClient {
    let base = Url::parse(&format!("{}/api/", server.base_url())).expect("base url");
    ApiClient::new(base, token.map(str::to_string)).expect("client")
}

#[test]
fn url_joins_relative_to_base_path() {
    let base = Url::parse("http://localhost:8080/api/").expect("base");
    let client = ApiClient::new(base, None).expect("client");
    assert_eq!(
        client.url("/posts/3").expect("url").as_str(),
        "http://localhost:8080/api/posts/3"
    );
    assert_eq!(
        client.url("comments/post/9").expect("url").as_str(),
        "http://localhost:8080/api/comments/post/9"
    );
}

#[test]
fn auth_header_is_absent_without_token() -> Result<(), ApiError> {
    let base = Url::parse("http://localhost:8080/api/").expect("base");
    let client = ApiClient::new(base.clone(), None)?;
    assert!(client.auth_header()?.is_none());

    let client = ApiClient::new(base, Some("tok".into()))?;
    let header = client.auth_header()?.expect("header");
    assert_eq!(header.to_str().expect("header str"), "Bearer tok");
    Ok(())
}

#[test]
fn user_message_falls_back_without_server_text() {
    let err = ApiError::Status {
        status: StatusCode::FORBIDDEN,
        message: None,
    };
    assert_eq!(err.user_message("Failed to delete post"), "Failed to delete post");

    let err = ApiError::Status {
        status: StatusCode::FORBIDDEN,
        message: Some("You don't have permission to delete this post".into()),
    };
    assert_eq!(
        err.user_message("Failed to delete post"),
        "You don't have permission to delete this post"
    );
}

#[tokio::test]
async fn list_posts_sends_bearer_token() -> Result<(), ApiError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/api/posts")
            .header("authorization", "Bearer secret");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"id":1,"title":"A","content":"x","authorId":2,"createdAt":"2024-01-05T15:04:05"}]"#);
    });

    let posts = client(&server, Some("secret")).list_posts().await?;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "A");
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn create_post_posts_title_and_content() -> Result<(), ApiError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/api/posts")
            .json_body_includes(r#"{"title":"T","content":"C"}"#);
        then.status(201)
            .header("content-type", "application/json")
            .body(r#"{"id":42,"title":"T","content":"C","authorId":1}"#);
    });

    let payload = PostWriteRequest {
        title: "T".into(),
        content: "C".into(),
    };
    let created = client(&server, Some("t")).create_post(&payload).await?;
    assert_eq!(created.id, 42);
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn update_post_uses_put() -> Result<(), ApiError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("PUT")
            .path("/api/posts/5")
            .json_body_includes(r#"{"title":"New"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"id":5,"title":"New","content":"C","authorId":1}"#);
    });

    let payload = PostWriteRequest {
        title: "New".into(),
        content: "C".into(),
    };
    let updated = client(&server, Some("t")).update_post(5, &payload).await?;
    assert_eq!(updated.title, "New");
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn comment_endpoints_use_post_scoped_paths() -> Result<(), ApiError> {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method("GET").path("/api/comments/post/9");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });
    let create = server.mock(|when, then| {
        when.method("POST")
            .path("/api/comments/post/9")
            .json_body_includes(r#"{"content":"hi"}"#);
        then.status(201)
            .header("content-type", "application/json")
            .body(r#"{"id":1,"content":"hi","authorId":1}"#);
    });
    let delete = server.mock(|when, then| {
        when.method("DELETE").path("/api/comments/1");
        then.status(204);
    });

    let api = client(&server, Some("t"));
    assert!(api.list_comments(9).await?.is_empty());
    api.create_comment(
        9,
        &CommentCreateRequest {
            content: "hi".into(),
        },
    )
    .await?;
    api.delete_comment(1).await?;

    list.assert();
    create.assert();
    delete.assert();
    Ok(())
}

#[tokio::test]
async fn category_writes_hit_expected_methods() -> Result<(), ApiError> {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method("POST")
            .path("/api/categories")
            .json_body_includes(r#"{"name":"rust"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"id":1,"name":"rust"}"#);
    });
    let update = server.mock(|when, then| {
        when.method("PUT")
            .path("/api/categories/1")
            .json_body_includes(r#"{"name":"systems"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"id":1,"name":"systems"}"#);
    });

    let api = client(&server, Some("t"));
    api.create_category(&CategoryWriteRequest {
        name: "rust".into(),
    })
    .await?;
    api.update_category(
        1,
        &CategoryWriteRequest {
            name: "systems".into(),
        },
    )
    .await?;

    create.assert();
    update.assert();
    Ok(())
}

#[tokio::test]
async fn error_body_text_is_preserved() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("DELETE").path("/api/posts/3");
        then.status(403)
            .header("content-type", "application/json")
            .body(r#"{"error":"You don't have permission to delete this post"}"#);
    });

    let err = client(&server, Some("t"))
        .delete_post(3)
        .await
        .expect_err("forbidden");
    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    assert_eq!(
        err.server_message(),
        Some("You don't have permission to delete this post")
    );
}

#[tokio::test]
async fn non_json_error_body_has_no_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/posts/1");
        then.status(500).body("Internal Server Error");
    });

    let err = client(&server, None)
        .get_post(1)
        .await
        .expect_err("server error");
    assert!(err.server_message().is_none());
    assert_eq!(err.user_message("Failed"), "Failed");
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/categories");
        then.status(200)
            .header("content-type", "application/json")
            .body("{not json");
    });

    let err = client(&server, None)
        .list_categories()
        .await
        .expect_err("decode failure");
    assert!(matches!(err, ApiError::Decode(_)));
}
