use crate::helpers::{is_clearing_cookie, set_cookies, TestApp};

#[tokio::test]
async fn valid_link_serves_secret_and_stores_the_token() {
    let app = TestApp::new().await;
    let token = app.valid_token();

    let response = app.get_verify(&token).await;

    assert_eq!(response.status().as_u16(), 200);

    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 1);
    let cookie = &cookies[0];
    assert!(
        cookie.starts_with(&format!("{}={}", app.config.token_cookie_name(), token)),
        "cookie should carry the presented token: {}",
        cookie
    );
    assert!(cookie.contains("HttpOnly"));
    assert!(
        !is_clearing_cookie(cookie, app.config.token_cookie_name()),
        "acceptance must not clear"
    );

    let body = response.text().await.unwrap();
    assert!(body.contains("secret page"));
}

#[tokio::test]
async fn stored_token_has_the_remaining_ttl() {
    let app = TestApp::new().await;
    let token = app.valid_token();

    let response = app.get_verify(&token).await;
    let cookies = set_cookies(&response);

    let max_age: i64 = cookies[0]
        .split("Max-Age=")
        .nth(1)
        .and_then(|s| s.split(';').next())
        .and_then(|s| s.parse().ok())
        .expect("cookie should carry Max-Age");
    assert!(max_age > 0 && max_age <= 300, "got Max-Age={}", max_age);
}

#[tokio::test]
async fn tampered_link_redirects_to_signup_and_clears_cookie() {
    let app = TestApp::new().await;
    let mut token = app.valid_token();
    token.push('x');

    let response = app.get_verify(&token).await;

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
async fn expired_link_redirects_to_signup_and_clears_cookie() {
    let app = TestApp::new().await;
    let token = app.expired_token();

    let response = app.get_verify(&token).await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers()["location"], "/signup");

    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 1, "denial clears exactly once");
    assert!(is_clearing_cookie(
        &cookies[0],
        app.config.token_cookie_name()
    ));
}
