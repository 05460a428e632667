//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use tower::ServiceExt;

use gatehouse_api::AppState;
use gatehouse_auth::{Claims, TokenClass, TokenCodec, TokenIssuer, TokenRefresher};
use gatehouse_core::config::AppConfig;
use gatehouse_core::config::app::ServerConfig;
use gatehouse_core::config::auth::AuthConfig;
use gatehouse_core::config::logging::LoggingConfig;
use gatehouse_core::types::UserId;
use gatehouse_store::{MemoryUserStore, UserStore};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Codec sharing the app's signing secret, for minting test tokens
    pub codec: Arc<TokenCodec>,
}

impl TestApp {
    /// Create a new test application backed by an empty in-memory store
    pub fn new() -> Self {
        let config = AppConfig {
            server: ServerConfig::default(),
            auth: AuthConfig {
                jwt_secret: "integration-test-secret".to_string(),
                access_ttl_minutes: 15,
                refresh_ttl_days: 7,
            },
            logging: LoggingConfig::default(),
        };

        let codec = Arc::new(TokenCodec::new(&config.auth));
        let issuer = Arc::new(TokenIssuer::new(Arc::clone(&codec), &config.auth));
        let refresher = Arc::new(TokenRefresher::new(
            Arc::clone(&codec),
            Arc::clone(&issuer),
        ));
        let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());

        let app_state = AppState {
            config: Arc::new(config.clone()),
            users,
            issuer,
            refresher,
        };

        let router = gatehouse_api::build_router(app_state);

        Self {
            router,
            config,
            codec,
        }
    }

    /// Sign up a user through the API, asserting success
    pub async fn signup(&self, username: &str, password: &str) -> Value {
        let body = serde_json::json!({
            "username": username,
            "password": password,
            "confirm_password": password,
        });

        let response = self.request("POST", "/signup", Some(body), None).await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Signup failed: {:?}",
            response.body
        );

        response.body
    }

    /// Login and return the parsed response body (both tokens included)
    pub async fn login(&self, username: &str, password: &str) -> Value {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self.request("POST", "/login", Some(body), None).await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body
    }

    /// Mint a token pair as if it had been issued at the given instant.
    ///
    /// Signed with the app's own secret, so the server accepts the tokens
    /// as authentic while their timestamps can lie in the past.
    pub fn pair_issued_at(&self, subject: UserId, issued_at: DateTime<Utc>) -> (String, String) {
        let access_exp =
            issued_at + Duration::minutes(self.config.auth.access_ttl_minutes as i64);
        let refresh_exp = issued_at + Duration::days(self.config.auth.refresh_ttl_days as i64);

        let access = Claims {
            sub: subject,
            iat: issued_at.timestamp(),
            exp: access_exp.timestamp(),
            class: TokenClass::Access,
        };
        let refresh = Claims {
            sub: subject,
            iat: issued_at.timestamp(),
            exp: refresh_exp.timestamp(),
            class: TokenClass::Refresh,
        };

        (
            self.codec.encode(&access).expect("encode access"),
            self.codec.encode(&refresh).expect("encode refresh"),
        )
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let auth = token.map(|t| format!("Bearer {}", t));
        self.send(method, path, body, auth.as_deref()).await
    }

    /// Make a request with the Authorization header value set verbatim
    pub async fn request_with_authorization(
        &self,
        method: &str,
        path: &str,
        header_value: &str,
    ) -> TestResponse {
        self.send(method, path, None, Some(header_value)).await
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        auth_header: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = auth_header {
            req = req.header("Authorization", value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The string value of a top-level body field, panicking if absent
    pub fn field(&self, name: &str) -> &str {
        self.body
            .get(name)
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| panic!("no string field '{}' in {:?}", name, self.body))
    }
}
