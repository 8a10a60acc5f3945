//! Shared handler state
//!
//! One `Arc` around everything so cloning per request is a refcount bump.

use std::fmt;
use std::sync::Arc;

use reactions_common::{AppConfig, JwtService, StorageBackend};
use reactions_service::ServiceContext;

struct Shared {
    service_context: ServiceContext,
    jwt: JwtService,
    config: AppConfig,
}

/// State handed to every handler and extractor
#[derive(Clone)]
pub struct AppState {
    shared: Arc<Shared>,
}

impl AppState {
    /// Bundle the service collaborators with the configuration they were
    /// built from; the token verifier is derived from `config.jwt`
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry);
        Self {
            shared: Arc::new(Shared {
                service_context,
                jwt,
                config,
            }),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.shared.service_context
    }

    pub fn config(&self) -> &AppConfig {
        &self.shared.config
    }

    /// Verifier for bearer tokens
    pub fn jwt_service(&self) -> &JwtService {
        &self.shared.jwt
    }

    pub fn storage(&self) -> StorageBackend {
        self.shared.config.storage
    }
}

// Config holds the signing secret, so only non-sensitive fields are shown.
impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("app", &self.shared.config.app.name)
            .field("env", &self.shared.config.app.env)
            .field("storage", &self.storage())
            .finish_non_exhaustive()
    }
}
