use chat_auth::domain::{AuthResponse, TokenMaker};

use crate::helpers::{get_random_username, TestApp};

#[tokio::test]
async fn should_return_422_if_malformed_username() {
    let app = TestApp::new().await;

    for username in ["", "ab", "has space"] {
        let response = app.register(username, "Password123!").await;
        assert_eq!(response.status().as_u16(), 422, "username {username:?}");
    }
}

#[tokio::test]
async fn should_return_422_if_weak_password() {
    let app = TestApp::new().await;

    let response = app.register(&get_random_username(), "password").await;
    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn should_return_201_with_a_working_token() {
    let app = TestApp::new().await;
    let username = get_random_username();

    let response = app.register(&username, "Password123!").await;
    assert_eq!(response.status().as_u16(), 201);

    let body = response
        .json::<AuthResponse>()
        .await
        .expect("Could not deserialize response body to AuthResponse");
    assert_eq!(body.user.id, 1);
    assert_eq!(body.user.username, username);
    assert!(body.user.created_at.is_some());

    let payload = app
        .token_maker
        .verify_token(&body.token)
        .expect("issued token should verify");
    assert_eq!(payload.identity, body.user);
    assert_eq!(payload.expires_at, body.expires_at);
}

#[tokio::test]
async fn should_return_409_if_username_already_exists() {
    let app = TestApp::new().await;
    let username = get_random_username();

    let response = app.register(&username, "Password123!").await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app.register(&username, "Password123!").await;
    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(
        response.text().await.unwrap(),
        format!("Username {} has already been taken.", username)
    );
}
