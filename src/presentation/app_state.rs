// Application state for HTTP handlers
use crate::application::credential_checker::CredentialChecker;
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::session_store::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub credentials: CredentialChecker,
    pub sessions: SessionStore,
    pub dashboard_service: DashboardService,
}
