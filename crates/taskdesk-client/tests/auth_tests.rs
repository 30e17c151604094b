/*
[INPUT]:  Mock HTTP responses for auth endpoints
[OUTPUT]: Test results for session handling
[POS]:    Integration tests - auth endpoints
[UPDATE]: When auth endpoints change
*/

mod common;

use common::{authenticated_client, session_cookie, setup_mock_server};
use taskdesk_client::{LoginRequest, PortalClient, PortalError, RegisterRequest};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn login_captures_session_cookie() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({
            "email": "budi@example.com",
            "password": "hunter2",
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "accessToken=fresh-token; Path=/; HttpOnly")
                .set_body_json(serde_json::json!({ "message": "ok" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut client = PortalClient::new(&server.uri()).unwrap();
    let token = assert_ok!(
        client
            .login(&LoginRequest {
                email: "budi@example.com".to_string(),
                password: "hunter2".to_string(),
            })
            .await
    );

    assert_eq!(token.access_token, "fresh-token");
    assert_eq!(
        client.session().map(|s| s.access_token.as_str()),
        Some("fresh-token")
    );
}

#[tokio::test]
async fn login_without_cookie_is_invalid_response() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let mut client = PortalClient::new(&server.uri()).unwrap();
    let err = client
        .login(&LoginRequest {
            email: "budi@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap_err();

    assert!(err.is_invalid_response());
    assert!(client.session().is_none());
}

#[tokio::test]
async fn login_failure_maps_to_unauthorized() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "error": "wrong password" })),
        )
        .mount(&server)
        .await;

    let mut client = PortalClient::new(&server.uri()).unwrap();
    let err = client
        .login(&LoginRequest {
            email: "budi@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
}

#[tokio::test]
async fn register_posts_full_form() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(serde_json::json!({
            "name": "Budi",
            "email": "budi@example.com",
            "password": "hunter2",
            "department_id": "d-7",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = PortalClient::new(&server.uri()).unwrap();
    assert_ok!(
        client
            .register(&RegisterRequest {
                name: "Budi".to_string(),
                email: "budi@example.com".to_string(),
                password: "hunter2".to_string(),
                department_id: "d-7".to_string(),
            })
            .await
    );
}

#[tokio::test]
async fn me_sends_session_cookie() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("cookie", session_cookie().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "u-1",
            "name": "Rina",
            "email": "rina@example.com",
            "department_name": "Manager",
            "department_id": "d-0",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    let profile = assert_ok!(client.me().await);

    assert_eq!(profile.name, "Rina");
    assert!(profile.role().is_manager());
}

#[tokio::test]
async fn me_without_session_fails_before_any_request() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = PortalClient::new(&server.uri()).unwrap();
    let err = client.me().await.unwrap_err();
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn expired_session_maps_to_unauthorized() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    let err = client.me().await.unwrap_err();
    assert!(matches!(err, PortalError::Unauthorized));
}

#[tokio::test]
async fn logout_clears_session_even_on_failure() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut client = authenticated_client(&server);
    let result = client.logout().await;

    assert!(result.is_err());
    assert!(client.session().is_none());
}

#[tokio::test]
async fn departments_lists_options() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/departments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": "d-1", "name": "Creative" },
            { "id": "d-2", "name": "Sales" },
        ])))
        .mount(&server)
        .await;

    let client = PortalClient::new(&server.uri()).unwrap();
    let departments = assert_ok!(client.departments().await);

    assert_eq!(departments.len(), 2);
    assert_eq!(departments[0].name, "Creative");
}
