use crate::helpers::{is_clearing_cookie, set_cookies, TestApp};

#[tokio::test]
async fn secret_without_token_redirects_to_signup() {
    let app = TestApp::new().await;

    let response = app.get_secret(None).await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers()["location"], "/signup");
    assert!(set_cookies(&response).is_empty());
}

#[tokio::test]
async fn secret_with_valid_cookie_is_served() {
    let app = TestApp::new().await;
    let token = app.valid_token();

    let response = app.get_secret(Some(&token)).await;

    assert_eq!(response.status().as_u16(), 200);
    // Default config does not renew on cookie verification.
    assert!(set_cookies(&response).is_empty());

    let body = response.text().await.unwrap();
    assert!(body.contains("secret page"));
}

#[tokio::test]
async fn secret_with_expired_cookie_redirects_and_clears() {
    let app = TestApp::new().await;
    let token = app.expired_token();

    let response = app.get_secret(Some(&token)).await;

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
async fn renew_on_verify_restores_the_cookie() {
    let app = TestApp::with_renew_on_verify(true).await;
    let token = app.valid_token();

    let response = app.get_secret(Some(&token)).await;

    assert_eq!(response.status().as_u16(), 200);

    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 1, "renewal re-stores the token");
    assert!(cookies[0].starts_with(&format!("{}={}", app.config.token_cookie_name(), token)));
    assert!(!is_clearing_cookie(
        &cookies[0],
        app.config.token_cookie_name()
    ));
}
