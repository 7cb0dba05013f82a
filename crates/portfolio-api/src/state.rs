//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use portfolio_auth::{CredentialVerifier, RbacEnforcer, TokenCodec};
use portfolio_core::config::AppConfig;
use portfolio_core::result::AppResult;
use portfolio_core::traits::DocumentStore;
use portfolio_i18n::TranslationResolver;
use portfolio_service::{
    AuditRecorder, AuditSink, ExperienceService, MyInfoService, ProjectService, SkillService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or cheap handles, so cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT issue/verify
    pub tokens: Arc<TokenCodec>,
    /// Authorization guard
    pub rbac: Arc<RbacEnforcer>,
    /// Login password checking
    pub credentials: Arc<CredentialVerifier>,

    // ── Cross-cutting ────────────────────────────────────────
    /// Localized field resolver
    pub resolver: Arc<TranslationResolver>,
    /// Request audit trail
    pub audit: AuditRecorder,

    // ── Services ─────────────────────────────────────────────
    /// Personal info
    pub myinfo: Arc<MyInfoService>,
    /// Work experience
    pub experience: Arc<ExperienceService>,
    /// Skills
    pub skill: Arc<SkillService>,
    /// Projects
    pub project: Arc<ProjectService>,
}

impl AppState {
    /// Wire every component on top of `store` and an already running audit `sink`.
    pub fn new(config: AppConfig, store: Arc<dyn DocumentStore>, sink: AuditSink) -> AppResult<Self> {
        let tokens = Arc::new(TokenCodec::new(&config.auth)?);
        let rbac = Arc::new(RbacEnforcer::new(Arc::clone(&tokens)));
        let credentials = Arc::new(CredentialVerifier::new(&config.auth));
        let resolver = Arc::new(TranslationResolver::new(&config.i18n));
        let audit = AuditRecorder::new(Arc::clone(&tokens), sink);

        let myinfo = Arc::new(MyInfoService::new(Arc::clone(&store), Arc::clone(&resolver)));
        let experience = Arc::new(ExperienceService::new(
            Arc::clone(&store),
            Arc::clone(&resolver),
        ));
        let skill = Arc::new(SkillService::new(Arc::clone(&store), Arc::clone(&resolver)));
        let project = Arc::new(ProjectService::new(store, Arc::clone(&resolver)));

        Ok(Self {
            config: Arc::new(config),
            tokens,
            rbac,
            credentials,
            resolver,
            audit,
            myinfo,
            experience,
            skill,
            project,
        })
    }
}
