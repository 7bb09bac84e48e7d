use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

use super::auth;
use super::health;
use super::items;
use super::middleware::{logging_middleware, security_headers_middleware};
use super::openapi::{self, DocsPathError};
use super::secure;
use super::state::AppState;
use crate::config::DocsConfig;

/// Paths routed regardless of the docs configuration
const API_PATHS: &[&str] = &[
    "/health",
    "/ready",
    "/live",
    auth::TOKEN_PATH,
    secure::SECURE_PATH,
    secure::SECRET_PATH,
];

/// Create the full router with application state
///
/// Fails when the configured docs path collides with an API route.
pub fn create_router(state: AppState, docs: &DocsConfig) -> Result<Router, DocsPathError> {
    let mut router = Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Login (no auth required)
        .merge(auth::create_auth_router())
        .merge(items::create_items_router())
        .merge(secure::create_secure_router());

    if docs.enabled {
        router = router.merge(openapi::create_docs_router(&docs.path, API_PATHS)?);
    }

    Ok(router
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::config::AppConfig;
    use crate::domain::DomainError;
    use crate::domain::access::StaticPrivilegeCheck;
    use crate::domain::credential::MockCredentialRepository;
    use crate::infrastructure::auth::{DEFAULT_STATIC_TOKEN, StaticTokenIssuer};
    use crate::infrastructure::credential::AuthService;

    fn test_app() -> Router {
        app_with(AppConfig::default())
    }

    fn app_with(config: AppConfig) -> Router {
        let state = crate::create_app_state(&config);
        create_router(state, &config.docs).unwrap()
    }

    async fn body_json(resp: Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn login_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/docs/api/token")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn admin_login_returns_static_token() {
        let resp = test_app()
            .oneshot(login_request("username=admin&password=admin"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            json!({"access_token": "example_token", "token_type": "bearer"})
        );
    }

    #[tokio::test]
    async fn user_login_returns_same_token() {
        let resp = test_app()
            .oneshot(login_request("username=user&password=password"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            json!({"access_token": "example_token", "token_type": "bearer"})
        );
    }

    #[tokio::test]
    async fn wrong_password_is_400() {
        let resp = test_app()
            .oneshot(login_request("username=admin&password=wrong"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            json!({"detail": "Incorrect username or password"})
        );
    }

    #[tokio::test]
    async fn login_is_case_sensitive() {
        let resp = test_app()
            .oneshot(login_request("username=ADMIN&password=admin"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn repeated_logins_are_identical() {
        let app = test_app();

        let first = app
            .clone()
            .oneshot(login_request("username=admin&password=admin"))
            .await
            .unwrap();
        let first = body_json(first).await;

        for _ in 0..3 {
            let resp = app
                .clone()
                .oneshot(login_request("username=admin&password=admin"))
                .await
                .unwrap();
            assert_eq!(body_json(resp).await, first);
        }
    }

    #[tokio::test]
    async fn login_accepts_password_grant_fields() {
        let resp = test_app()
            .oneshot(login_request(
                "grant_type=password&username=user&password=password&scope=&client_id=swagger",
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn login_rejects_other_grant_type() {
        let resp = test_app()
            .oneshot(login_request(
                "grant_type=client_credentials&username=admin&password=admin",
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn login_missing_field_is_422() {
        let resp = test_app()
            .oneshot(login_request("username=admin"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_json(resp).await["detail"].is_string());
    }

    #[tokio::test]
    async fn login_storage_failure_is_500() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_find_by_credentials()
            .returning(|_, _| Err(DomainError::storage("store offline")));

        let issuer = StaticTokenIssuer::new(DEFAULT_STATIC_TOKEN);
        let service = AuthService::new(Arc::new(repo), Arc::new(issuer));
        let openapi = openapi::build_openapi(&StaticPrivilegeCheck::default());
        let state = AppState::new(Arc::new(service), openapi);
        let app = create_router(state, &DocsConfig::default()).unwrap();

        let resp = app
            .oneshot(login_request("username=admin&password=admin"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn secure_endpoint_accepts_any_token() {
        let req = Request::builder()
            .uri("/secure_endpoint?item_id=5")
            .header(header::AUTHORIZATION, "Bearer not-a-real-token")
            .body(Body::empty())
            .unwrap();

        let resp = test_app().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            json!({"item_id": 5, "message": "Authorized user"})
        );
    }

    #[tokio::test]
    async fn secure_endpoint_item_id_optional() {
        let req = Request::builder()
            .uri("/secure_endpoint")
            .header(header::AUTHORIZATION, "Bearer example_token")
            .header("x-token", "x")
            .header("y-token", "y")
            .body(Body::empty())
            .unwrap();

        let resp = test_app().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            json!({"item_id": null, "message": "Authorized user"})
        );
    }

    #[tokio::test]
    async fn secure_endpoint_without_token_is_401() {
        let resp = test_app()
            .oneshot(get_request("/secure_endpoint?item_id=5"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(resp.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
        assert_eq!(body_json(resp).await, json!({"detail": "Not authenticated"}));
    }

    #[tokio::test]
    async fn secure_endpoint_rejects_non_bearer_scheme() {
        let req = Request::builder()
            .uri("/secure_endpoint")
            .header(header::AUTHORIZATION, "Basic YWRtaW46YWRtaW4=")
            .body(Body::empty())
            .unwrap();

        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn secure_endpoint_bad_item_id_is_422() {
        let req = Request::builder()
            .uri("/secure_endpoint?item_id=abc")
            .header(header::AUTHORIZATION, "Bearer example_token")
            .body(Body::empty())
            .unwrap();

        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_item_echoes_body_with_defaults() {
        let req = Request::builder()
            .method("POST")
            .uri("/items/2")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name": "Dana"}"#))
            .unwrap();

        let resp = test_app().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            json!({"user_id": "2", "body": {"name": "Dana", "second_name": "Ray"}})
        );
    }

    #[tokio::test]
    async fn create_item_unknown_slot_is_422() {
        let req = Request::builder()
            .method("POST")
            .uri("/items/4")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_item_without_content_type_reads_json() {
        let req = Request::builder()
            .method("POST")
            .uri("/items/1")
            .body(Body::from("{}"))
            .unwrap();

        let resp = test_app().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            json!({"user_id": "1", "body": {"name": "Alex", "second_name": "Ray"}})
        );
    }

    #[tokio::test]
    async fn create_item_missing_or_broken_body_is_422() {
        for body in ["", "{\"name\": ", "[1, 2]"] {
            let req = Request::builder()
                .method("POST")
                .uri("/items/1")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap();

            let resp = test_app().oneshot(req).await.unwrap();
            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "body {body:?}");
            assert!(body_json(resp).await["detail"].is_string());
        }
    }

    #[tokio::test]
    async fn login_without_form_content_type_is_422() {
        let req = Request::builder()
            .method("POST")
            .uri("/docs/api/token")
            .body(Body::from("username=admin&password=admin"))
            .unwrap();

        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn secret_method_callable_while_hidden() {
        let app = test_app();

        let resp = app.clone().oneshot(get_request("/secret_method")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            json!({"message": "This is a secret message."})
        );

        let resp = app.oneshot(get_request("/openapi.json")).await.unwrap();
        let spec = body_json(resp).await;
        assert!(spec["paths"].get("/secret_method").is_none());
        assert!(spec["paths"].get("/secure_endpoint").is_some());
    }

    #[tokio::test]
    async fn secret_method_listed_when_privileged() {
        let mut config = AppConfig::default();
        config.docs.show_privileged = true;

        let resp = app_with(config).oneshot(get_request("/openapi.json")).await.unwrap();
        let spec = body_json(resp).await;
        assert!(spec["paths"].get("/secret_method").is_some());
    }

    #[tokio::test]
    async fn docs_page_served_at_configured_path() {
        let resp = test_app().oneshot(get_request("/docs/api/v1.0")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let csp = resp
            .headers()
            .get(header::CONTENT_SECURITY_POLICY)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(csp.contains("cdn.jsdelivr.net"));

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("/openapi.json"));
    }

    #[test]
    fn docs_path_colliding_with_api_route_is_rejected() {
        for path in ["/health", "/ready", "/docs/api/token", "secure_endpoint", "/openapi.json"] {
            let mut config = AppConfig::default();
            config.docs.path = path.to_string();
            let state = crate::create_app_state(&config);

            let err = create_router(state, &config.docs).unwrap_err();
            assert!(matches!(err, DocsPathError::Conflict(_)), "{path} accepted");
        }
    }

    #[test]
    fn docs_path_collision_ignored_when_docs_disabled() {
        let mut config = AppConfig::default();
        config.docs.enabled = false;
        config.docs.path = "/health".to_string();
        let state = crate::create_app_state(&config);

        assert!(create_router(state, &config.docs).is_ok());
    }

    #[tokio::test]
    async fn docs_disabled_removes_routes() {
        let mut config = AppConfig::default();
        config.docs.enabled = false;
        let app = app_with(config);

        let resp = app.clone().oneshot(get_request("/openapi.json")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = app.oneshot(get_request("/docs/api/v1.0")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn configured_users_and_token() {
        let mut config = AppConfig::default();
        config.auth.token = "shared-demo".to_string();
        config.auth.users = vec![crate::domain::CredentialRecord::new(
            "ops",
            "pw",
            crate::domain::Role::Admin,
        )];
        let app = app_with(config);

        let resp = app
            .clone()
            .oneshot(login_request("username=ops&password=pw"))
            .await
            .unwrap();
        assert_eq!(body_json(resp).await["access_token"], "shared-demo");

        let resp = app
            .oneshot(login_request("username=admin&password=admin"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_endpoints() {
        let app = test_app();

        let resp = app.clone().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["status"], "healthy");

        let resp = app.clone().oneshot(get_request("/live")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app.oneshot(get_request("/ready")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["checks"][0]["name"], "credential_store");
    }

    #[tokio::test]
    async fn ready_fails_on_empty_store() {
        let mut config = AppConfig::default();
        config.auth.users = Vec::new();

        let resp = app_with(config).oneshot(get_request("/ready")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn responses_carry_security_headers() {
        let resp = test_app().oneshot(get_request("/health")).await.unwrap();

        assert_eq!(
            resp.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );
        assert_eq!(
            resp.headers().get(header::CONTENT_SECURITY_POLICY).unwrap(),
            "default-src 'none'; frame-ancestors 'none'"
        );
    }
}
