use super::{Notification, SubmissionGuard, SubmitError};
use crate::models::LoginData;
use crate::services::{ApiClient, AuthService};
use crate::state::AuthState;
use crate::validation::{validate_login, LoginForm};

pub const ERROR_TITLE: &str = "Error";
pub const ERROR_FALLBACK: &str = "Error al iniciar sesión";

#[derive(Debug, Clone, PartialEq)]
pub struct LoggedIn {
    pub data: LoginData,
    pub notification: Notification,
}

/// ViewModel de login - SOLO lógica de negocio
pub struct LoginViewModel {
    service: AuthService,
    auth_state: AuthState,
    guard: SubmissionGuard,
}

impl LoginViewModel {
    pub fn new(api: ApiClient, auth_state: AuthState) -> Self {
        Self {
            service: AuthService::new(api),
            auth_state,
            guard: SubmissionGuard::new(),
        }
    }

    pub fn guard(&self) -> &SubmissionGuard {
        &self.guard
    }

    /// Login y persistencia de la sesión. Si falla, la sesión no se toca.
    pub async fn submit(&self, form: &LoginForm) -> Result<LoggedIn, SubmitError> {
        let credentials = validate_login(form).map_err(SubmitError::Validation)?;
        let ticket = self.guard.begin().ok_or(SubmitError::Busy)?;

        let result = self.service.login(&credentials).await;
        if !ticket.is_current() {
            return Err(SubmitError::Cancelled);
        }
        let data = result?;

        if let Err(e) = self.auth_state.set_auth(&data.token, &data.user) {
            log::warn!("⚠️ Sesión iniciada pero no persistida: {}", e);
        }

        Ok(LoggedIn {
            notification: Notification::success(
                "Inicio de sesión exitoso",
                format!("Bienvenido {}", data.user.given_names),
            ),
            data,
        })
    }

    pub fn error_notification(error: &SubmitError) -> Option<Notification> {
        Notification::for_submit_error(error, ERROR_TITLE, ERROR_FALLBACK)
    }
}
