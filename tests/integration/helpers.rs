//! Shared test helpers for integration tests.

use std::sync::{Arc, OnceLock};

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use portfolio_api::{AppState, build_app};
use portfolio_auth::PasswordHasher;
use portfolio_core::config::{AppConfig, AuditConfig};
use portfolio_database::MemoryDocumentStore;
use portfolio_entity::audit::AuditEntry;
use portfolio_entity::user::Role;
use portfolio_service::AuditSink;

pub const OWNER_PASSWORD: &str = "owner-pass";
pub const MAINTAINER_PASSWORD: &str = "maintainer-pass";

/// Argon2 hashes are slow in debug builds, so compute them once.
fn password_hashes() -> &'static (String, String) {
    static HASHES: OnceLock<(String, String)> = OnceLock::new();
    HASHES.get_or_init(|| {
        let hasher = PasswordHasher::new();
        (
            hasher.hash_password(OWNER_PASSWORD).expect("hash owner"),
            hasher.hash_password(MAINTAINER_PASSWORD).expect("hash maintainer"),
        )
    })
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// State shared with the router
    pub state: AppState,
    /// Holds the audit directory for the lifetime of the app
    pub audit_dir: TempDir,
}

impl TestApp {
    /// Create a new test application on an in-memory store
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a test application after adjusting the default test config
    pub async fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let audit_dir = tempfile::tempdir().expect("Failed to create audit dir");
        let (owner_hash, maintainer_hash) = password_hashes().clone();

        let mut config = AppConfig::default();
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.auth.owner_password_hash = Some(owner_hash);
        config.auth.maintainer_password_hash = Some(maintainer_hash);
        config.audit = AuditConfig {
            file: audit_dir.path().join("audit.log").display().to_string(),
            ..AuditConfig::default()
        };
        adjust(&mut config);

        let (sink, _writer) = AuditSink::spawn(&config.audit).expect("Failed to start audit sink");
        let store = Arc::new(MemoryDocumentStore::new());
        let state = AppState::new(config, store, sink).expect("Failed to build state");

        Self {
            router: build_app(state.clone()),
            state,
            audit_dir,
        }
    }

    /// A valid token for `role`
    pub fn token(&self, role: Role) -> String {
        self.token_for("tester", role)
    }

    /// A valid token for `subject` with `role`
    pub fn token_for(&self, subject: &str, role: Role) -> String {
        self.state
            .tokens
            .issue(subject, role)
            .expect("Failed to issue token")
            .token
    }

    /// Make a JSON request to the app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prebuilt request to the app
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Log in with a urlencoded form
    pub async fn login_form(&self, username: &str, password: &str) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri("/login")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(format!("username={username}&password={password}")))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Every entry of the active audit file, oldest first
    pub async fn audit_entries(&self) -> Vec<AuditEntry> {
        self.state
            .audit
            .sink()
            .tail(0)
            .await
            .expect("Failed to read audit log")
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The envelope's `error` code
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

/// A valid skill body
pub fn skill_body(name: &str) -> Value {
    json!({
        "name": name,
        "experience": 3,
        "description": { "en": "Systems language", "es": "Lenguaje de sistemas" },
        "icon_source": "https://example.com/icon.svg",
        "code_example": "fn main() {}"
    })
}

/// A valid experience body
pub fn experience_body(role: &str, company: &str) -> Value {
    json!({
        "role": role,
        "company": {
            "name": company,
            "location": "Springfield",
            "zip_code": "00000",
            "industry": "Software",
            "foundation": "1999"
        },
        "start_date": "2020-01-01",
        "description": { "en": "Built things", "es": "Construí cosas" }
    })
}

/// A valid personal info body
pub fn myinfo_body() -> Value {
    json!({
        "full_name": "Ada Lovelace",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "pseudonym": "ada",
        "pseudonym_ascii": "ada",
        "about_me": { "en": "Mathematician", "es": "Matemática" },
        "phone": "555-0100",
        "email": "ada@example.com"
    })
}

/// A valid project body of builder `kind`
pub fn project_body(name: &str, kind: &str) -> Value {
    json!({
        "name": name,
        "type": kind,
        "scale": "medium",
        "deployment": true,
        "description": { "en": "A project", "es": "Un proyecto" },
        "tech_stack": ["rust"]
    })
}
