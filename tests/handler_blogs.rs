mod common;

use axum::http::StatusCode;
use blog_catalog::domain::repositories::BlogRepository;
use common::{OTHER_TOKEN, ROOT_TOKEN};
use serde_json::{Value, json};

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[tokio::test]
async fn test_blogs_are_returned_as_json() {
    let (server, repo) = common::test_server().await;
    common::seed_catalog(&repo).await;

    let response = server
        .get("/api/blogs")
        .add_header("Authorization", bearer(ROOT_TOKEN))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/json"
    );

    let json = response.json::<Value>();
    let blogs = json.as_array().unwrap();
    assert_eq!(blogs.len(), 6);
    assert_eq!(blogs[0]["title"], "React patterns");
}

#[tokio::test]
async fn test_blog_identifier_is_named_id() {
    let (server, repo) = common::test_server().await;
    common::seed_catalog(&repo).await;

    let response = server
        .get("/api/blogs")
        .add_header("Authorization", bearer(ROOT_TOKEN))
        .await;

    let json = response.json::<Value>();
    for blog in json.as_array().unwrap() {
        assert!(blog["id"].is_i64());
        assert!(blog.get("_id").is_none());
    }
}

#[tokio::test]
async fn test_get_blog_by_id() {
    let (server, repo) = common::test_server().await;
    let blog = common::seed_blog(&repo, "Type wars", Some("Robert C. Martin"), 2, 1).await;

    let response = server
        .get(&format!("/api/blogs/{}", blog.id))
        .add_header("Authorization", bearer(ROOT_TOKEN))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["title"], "Type wars");
    assert_eq!(json["likes"], 2);
}

#[tokio::test]
async fn test_get_missing_blog_is_not_found() {
    let (server, _repo) = common::test_server().await;

    let response = server
        .get("/api/blogs/999")
        .add_header("Authorization", bearer(ROOT_TOKEN))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_create_blog() {
    let (server, repo) = common::test_server().await;
    common::seed_catalog(&repo).await;

    let response = server
        .post("/api/blogs")
        .add_header("Authorization", bearer(ROOT_TOKEN))
        .json(&json!({
            "title": "Full stack open",
            "author": "Matti Luukkainen",
            "url": "https://fullstackopen.com",
            "likes": 3
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    assert_eq!(json["title"], "Full stack open");
    assert_eq!(json["author"], "Matti Luukkainen");
    assert_eq!(json["likes"], 3);
    assert_eq!(json["user_id"], 1);

    let stored = repo.list_all().await.unwrap();
    assert_eq!(stored.len(), 7);
    assert_eq!(stored[6].title, "Full stack open");
}

#[tokio::test]
async fn test_create_blog_without_likes_defaults_to_zero() {
    let (server, _repo) = common::test_server().await;

    let response = server
        .post("/api/blogs")
        .add_header("Authorization", bearer(ROOT_TOKEN))
        .json(&json!({
            "title": "No likes yet",
            "author": "Someone",
            "url": "https://example.com/no-likes"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["likes"], 0);
}

#[tokio::test]
async fn test_create_blog_without_author() {
    let (server, _repo) = common::test_server().await;

    let response = server
        .post("/api/blogs")
        .add_header("Authorization", bearer(ROOT_TOKEN))
        .json(&json!({ "title": "Anonymous", "url": "https://example.com/anon", "author": "  " }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert!(response.json::<Value>()["author"].is_null());
}

#[tokio::test]
async fn test_create_blog_without_title_is_bad_request() {
    let (server, repo) = common::test_server().await;

    let response = server
        .post("/api/blogs")
        .add_header("Authorization", bearer(ROOT_TOKEN))
        .json(&json!({ "author": "Someone", "url": "https://example.com/x" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "validation_error"
    );
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_blog_without_url_is_bad_request() {
    let (server, repo) = common::test_server().await;

    let response = server
        .post("/api/blogs")
        .add_header("Authorization", bearer(ROOT_TOKEN))
        .json(&json!({ "title": "No url", "author": "Someone" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_blog_with_negative_likes_is_bad_request() {
    let (server, _repo) = common::test_server().await;

    let response = server
        .post("/api/blogs")
        .add_header("Authorization", bearer(ROOT_TOKEN))
        .json(&json!({ "title": "t", "url": "https://example.com/t", "likes": -1 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_blog_without_token_is_unauthorized() {
    let (server, repo) = common::test_server().await;

    let response = server
        .post("/api/blogs")
        .json(&json!({ "title": "t", "url": "https://example.com/t" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.header("www-authenticate").to_str().unwrap(),
        "Bearer"
    );
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() {
    let (server, _repo) = common::test_server().await;

    let response = server
        .get("/api/blogs")
        .add_header("Authorization", bearer("not-a-real-token"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["error"]["code"], "unauthorized");
}

#[tokio::test]
async fn test_update_blog_likes() {
    let (server, repo) = common::test_server().await;
    let blog = common::seed_blog(&repo, "First class tests", Some("Robert C. Martin"), 10, 1).await;

    let response = server
        .put(&format!("/api/blogs/{}", blog.id))
        .add_header("Authorization", bearer(OTHER_TOKEN))
        .json(&json!({ "likes": 11 }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["likes"], 11);
    assert_eq!(json["title"], "First class tests");

    let stored = repo.find_by_id(blog.id).await.unwrap().unwrap();
    assert_eq!(stored.likes, 11);
}

#[tokio::test]
async fn test_update_accepts_full_blog_body() {
    let (server, repo) = common::test_server().await;
    let blog = common::seed_blog(&repo, "Type wars", Some("Robert C. Martin"), 2, 1).await;

    let response = server
        .put(&format!("/api/blogs/{}", blog.id))
        .add_header("Authorization", bearer(ROOT_TOKEN))
        .json(&json!({
            "id": blog.id,
            "title": "Type wars",
            "author": "Robert C. Martin",
            "url": blog.url,
            "likes": 3,
            "user_id": 1
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["likes"], 3);
}

#[tokio::test]
async fn test_update_can_clear_author() {
    let (server, repo) = common::test_server().await;
    let blog = common::seed_blog(&repo, "Type wars", Some("Robert C. Martin"), 2, 1).await;

    let response = server
        .put(&format!("/api/blogs/{}", blog.id))
        .add_header("Authorization", bearer(ROOT_TOKEN))
        .json(&json!({ "author": null }))
        .await;

    response.assert_status_ok();
    assert!(response.json::<Value>()["author"].is_null());
}

#[tokio::test]
async fn test_update_blog_with_negative_likes_is_bad_request() {
    let (server, repo) = common::test_server().await;
    let blog = common::seed_blog(&repo, "Type wars", Some("Robert C. Martin"), 2, 1).await;

    let response = server
        .put(&format!("/api/blogs/{}", blog.id))
        .add_header("Authorization", bearer(ROOT_TOKEN))
        .json(&json!({ "likes": -1 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "validation_error"
    );
    assert_eq!(repo.find_by_id(blog.id).await.unwrap().unwrap().likes, 2);
}

#[tokio::test]
async fn test_update_blog_with_blank_title_is_bad_request() {
    let (server, repo) = common::test_server().await;
    let blog = common::seed_blog(&repo, "Type wars", Some("Robert C. Martin"), 2, 1).await;

    for body in [json!({ "title": "   " }), json!({ "title": "" })] {
        let response = server
            .put(&format!("/api/blogs/{}", blog.id))
            .add_header("Authorization", bearer(ROOT_TOKEN))
            .json(&body)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    let stored = repo.find_by_id(blog.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Type wars");
}

#[tokio::test]
async fn test_update_blog_with_blank_url_is_bad_request() {
    let (server, repo) = common::test_server().await;
    let blog = common::seed_blog(&repo, "Type wars", Some("Robert C. Martin"), 2, 1).await;

    let response = server
        .put(&format!("/api/blogs/{}", blog.id))
        .add_header("Authorization", bearer(ROOT_TOKEN))
        .json(&json!({ "url": " " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(repo.find_by_id(blog.id).await.unwrap().unwrap().url, blog.url);
}

#[tokio::test]
async fn test_update_missing_blog_is_not_found() {
    let (server, _repo) = common::test_server().await;

    let response = server
        .put("/api/blogs/999")
        .add_header("Authorization", bearer(ROOT_TOKEN))
        .json(&json!({ "likes": 1 }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_blog_by_creator() {
    let (server, repo) = common::test_server().await;
    common::seed_catalog(&repo).await;
    let blog = common::seed_blog(&repo, "To be removed", None, 0, 1).await;

    let response = server
        .delete(&format!("/api/blogs/{}", blog.id))
        .add_header("Authorization", bearer(ROOT_TOKEN))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);

    let titles: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.title)
        .collect();
    assert_eq!(titles.len(), 6);
    assert!(!titles.contains(&"To be removed".to_string()));
}

#[tokio::test]
async fn test_delete_blog_by_other_user_is_forbidden() {
    let (server, repo) = common::test_server().await;
    let blog = common::seed_blog(&repo, "Owned by root", None, 0, 1).await;

    let response = server
        .delete(&format!("/api/blogs/{}", blog.id))
        .add_header("Authorization", bearer(OTHER_TOKEN))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(response.json::<Value>()["error"]["code"], "forbidden");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_missing_blog_is_not_found() {
    let (server, _repo) = common::test_server().await;

    let response = server
        .delete("/api/blogs/42")
        .add_header("Authorization", bearer(ROOT_TOKEN))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
