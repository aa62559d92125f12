use chat_auth::domain::AuthResponse;

use crate::helpers::{get_random_username, TestApp};

#[tokio::test]
async fn should_return_422_if_malformed_username() {
    let app = TestApp::new().await;

    let response = app.login("", "Password123!").await;
    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn should_return_401_if_user_not_found() {
    let app = TestApp::new().await;

    let response = app.login(&get_random_username(), "Password123!").await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn unknown_user_and_wrong_password_look_the_same() {
    let app = TestApp::new().await;
    let username = get_random_username();
    app.register(&username, "Password123!").await;

    let wrong_password = app.login(&username, "Different123!").await;
    assert_eq!(wrong_password.status().as_u16(), 401);
    let wrong_password = wrong_password.text().await.unwrap();

    let unknown_user = app.login(&get_random_username(), "Password123!").await;
    assert_eq!(unknown_user.status().as_u16(), 401);
    assert_eq!(unknown_user.text().await.unwrap(), wrong_password);
}

#[tokio::test]
async fn should_return_200_with_token_for_valid_credentials() {
    let app = TestApp::new().await;
    let username = get_random_username();

    let response = app.register(&username, "Password123!").await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app.login(&username, "Password123!").await;
    assert_eq!(response.status().as_u16(), 200);

    let body = response
        .json::<AuthResponse>()
        .await
        .expect("Could not deserialize response body to AuthResponse");
    assert_eq!(body.user.username, username);
    assert!(body.token.starts_with("v4.local."));
}
