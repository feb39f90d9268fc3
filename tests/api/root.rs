use crate::helpers::{is_clearing_cookie, set_cookies, TestApp};

#[tokio::test]
async fn root_without_token_redirects_to_signup() {
    let app = TestApp::new().await;

    let response = app.get_root(None).await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers()["location"], "/signup");
    // Nothing was stored, so nothing gets cleared.
    assert!(set_cookies(&response).is_empty());
}

#[tokio::test]
async fn root_with_valid_token_redirects_to_secret() {
    let app = TestApp::new().await;
    let token = app.valid_token();

    let response = app.get_root(Some(&token)).await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers()["location"], "/secret");
    // Acceptance never clears (and renew-on-verify is off by default).
    assert!(set_cookies(&response).is_empty());
}

#[tokio::test]
async fn root_with_garbage_token_redirects_to_signup_and_clears_cookie() {
    let app = TestApp::new().await;

    let response = app.get_root(Some("not-a-jwt")).await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers()["location"], "/signup");

    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 1, "denial clears exactly once");
    assert!(is_clearing_cookie(
        &cookies[0],
        app.config.token_cookie_name()
    ));
}

#[tokio::test]
async fn root_with_expired_token_redirects_to_signup_and_clears_cookie() {
    let app = TestApp::new().await;
    let token = app.expired_token();

    let response = app.get_root(Some(&token)).await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers()["location"], "/signup");

    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 1, "denial clears exactly once");
    assert!(is_clearing_cookie(
        &cookies[0],
        app.config.token_cookie_name()
    ));
}

#[tokio::test]
async fn signup_serves_the_entry_page() {
    let app = TestApp::new().await;

    let response = app.get_signup().await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("Request access"));
}
