use chrono::Duration;

use chat_auth::domain::{AuthResponse, Identity, TokenMaker, UserResponse};
use chat_auth::services::PasetoMaker;

use crate::helpers::{get_random_username, TestApp, TEST_ISSUER};

#[tokio::test]
async fn should_return_200_with_identity_for_valid_token() {
    let app = TestApp::new().await;
    let username = get_random_username();

    let registered = app
        .register(&username, "Password123!")
        .await
        .json::<AuthResponse>()
        .await
        .expect("Could not deserialize response body to AuthResponse");

    let response = app
        .me(Some(&format!("Bearer {}", registered.token)))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body = response
        .json::<UserResponse>()
        .await
        .expect("Could not deserialize response body to UserResponse");
    assert_eq!(body.user, registered.user);
}

#[tokio::test]
async fn should_not_need_a_stored_user() {
    let app = TestApp::new().await;
    let alice = Identity::new(1, "alice");

    let issued = app
        .token_maker
        .create_token(&alice, Duration::minutes(30))
        .expect("Failed to issue token");

    let response = app.me(Some(&format!("Bearer {}", issued.token))).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = response.json::<UserResponse>().await.unwrap();
    assert_eq!(body.user, alice);
}

#[tokio::test]
async fn should_return_401_if_header_missing_or_malformed() {
    let app = TestApp::new().await;

    let issued = app
        .token_maker
        .create_token(&Identity::new(1, "alice"), Duration::minutes(30))
        .expect("Failed to issue token");

    let malformed = [
        None,
        Some(String::new()),
        Some("Bearer".to_string()),
        Some(issued.token.clone()),
        Some(format!("Basic {}", issued.token)),
    ];

    for header in malformed {
        let response = app.me(header.as_deref()).await;
        assert_eq!(response.status().as_u16(), 401, "header {header:?}");
        assert_eq!(
            response.headers().get("www-authenticate").unwrap(),
            "Bearer"
        );
        assert_eq!(
            response.text().await.unwrap(),
            "Bearer authorization header is required."
        );
    }
}

#[tokio::test]
async fn expired_tampered_and_foreign_tokens_get_the_same_response() {
    let app = TestApp::new().await;
    let alice = Identity::new(1, "alice");

    let expired = app
        .token_maker
        .create_token(&alice, Duration::minutes(-1))
        .expect("Failed to issue token")
        .token;

    let mut tampered = app
        .token_maker
        .create_token(&alice, Duration::minutes(30))
        .expect("Failed to issue token")
        .token
        .into_bytes();
    tampered[20] = if tampered[20] == b'a' { b'b' } else { b'a' };
    let tampered = String::from_utf8(tampered).unwrap();

    let foreign_maker = PasetoMaker::new(b"another-key-0123456789-another-k", TEST_ISSUER)
        .expect("failed to build token maker");
    let foreign = foreign_maker
        .create_token(&alice, Duration::minutes(30))
        .expect("Failed to issue token")
        .token;

    for token in [expired, tampered, foreign, "invalid.token.here".to_string()] {
        let response = app.me(Some(&format!("Bearer {token}"))).await;
        assert_eq!(response.status().as_u16(), 401);
        assert_eq!(response.text().await.unwrap(), "token is invalid");
    }
}
