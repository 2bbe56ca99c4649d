#![allow(dead_code)]

use std::sync::Arc;

use auth::AuthConfig;
use auth::Authenticator;
use auth::ManualClock;
use auth::PasswordHasher;
use chrono::Utc;
use headhunter_service::domain::headhunter::service::AuthService;
use headhunter_service::inbound::http::router::create_router;
use headhunter_service::outbound::repositories::InMemoryHeadhunterDirectory;
use serde_json::json;
use serde_json::Value;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TTL_MINUTES: i64 = 30;

/// Build an authenticator with cheap hashing parameters on the given clock.
pub fn test_authenticator(clock: Arc<ManualClock>) -> Arc<Authenticator> {
    let config = AuthConfig::new(TEST_SECRET, "HS256", TTL_MINUTES, 0)
        .expect("Failed to build auth config");
    Arc::new(
        Authenticator::with_clock(config, clock)
            .with_password_hasher(PasswordHasher::with_params(1024, 1, 1).unwrap()),
    )
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub directory: Arc<InMemoryHeadhunterDirectory>,
    pub clock: Arc<ManualClock>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        Self::spawn_with(false).await
    }

    /// Spawn with login disclosure of unknown emails turned off
    pub async fn spawn_concealing() -> Self {
        Self::spawn_with(true).await
    }

    async fn spawn_with(conceal_unknown_email: bool) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let clock = Arc::new(ManualClock::new(Utc::now()));
        let directory = Arc::new(InMemoryHeadhunterDirectory::new());
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&directory),
            test_authenticator(Arc::clone(&clock)),
        ));

        let router = create_router(auth_service, conceal_unknown_email);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            directory,
            clock,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Register a headhunter and return the response body
    pub async fn register(&self, email: &str, password: &str) -> Value {
        let response = self
            .post("/api/v1/auth/register")
            .json(&json!({
                "name": "Ann",
                "phone": "0123456789",
                "email": email,
                "password": password,
                "area_id": 1
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }

    /// Log in and return the access token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/v1/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"]["access_token"]
            .as_str()
            .expect("access_token missing")
            .to_string()
    }
}
