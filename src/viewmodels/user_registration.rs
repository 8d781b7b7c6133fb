use super::{Notification, SubmissionGuard, SubmitError};
use crate::models::{Role, User};
use crate::services::{ApiClient, ApiError, RoleService, UserService};
use crate::validation::{validate_user, UserForm};

pub const ERROR_TITLE: &str = "Error al crear usuario";
pub const ERROR_FALLBACK: &str = "No se pudo crear el usuario. Intente nuevamente.";
pub const ROLES_ERROR_TITLE: &str = "Error al cargar roles";
pub const ROLES_ERROR_FALLBACK: &str = "No se pudieron obtener los roles disponibles";

#[derive(Debug, Clone, PartialEq)]
pub struct UserRegistered {
    pub user: User,
    pub notification: Notification,
    /// Formulario limpio para la misma empresa
    pub reset_form: UserForm,
}

pub struct UserRegistrationViewModel {
    users: UserService,
    roles: RoleService,
    guard: SubmissionGuard,
}

impl UserRegistrationViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            users: UserService::new(api.clone()),
            roles: RoleService::new(api),
            guard: SubmissionGuard::new(),
        }
    }

    pub fn guard(&self) -> &SubmissionGuard {
        &self.guard
    }

    pub async fn load_roles(&self) -> Result<Vec<Role>, ApiError> {
        self.roles.list().await
    }

    pub fn roles_error_notification(error: &ApiError) -> Notification {
        let message = error
            .user_message()
            .unwrap_or_else(|| ROLES_ERROR_FALLBACK.to_string());
        Notification::error(ROLES_ERROR_TITLE, message)
    }

    /// Selecciona el rol dentro del formulario
    pub fn select_role(form: &UserForm, role_id: &str) -> UserForm {
        UserForm {
            role: role_id.to_string(),
            ..form.clone()
        }
    }

    /// Valida y crea el usuario. Tras el éxito el formulario se reinicia en
    /// la misma pantalla (no hay transición automática al login).
    pub async fn submit(&self, form: &UserForm) -> Result<UserRegistered, SubmitError> {
        let request = validate_user(form).map_err(SubmitError::Validation)?;
        let ticket = self.guard.begin().ok_or(SubmitError::Busy)?;

        let result = self.users.create(&request).await;
        if !ticket.is_current() {
            log::warn!("⚠️ Respuesta de usuario descartada: la pantalla ya no está activa");
            return Err(SubmitError::Cancelled);
        }
        let user = result?;

        Ok(UserRegistered {
            notification: Notification::success(
                "¡Usuario creado exitosamente!",
                format!("{} {} ha sido registrado", user.given_names, user.surnames),
            ),
            reset_form: UserForm::for_company(request.company),
            user,
        })
    }

    pub fn error_notification(error: &SubmitError) -> Option<Notification> {
        Notification::for_submit_error(error, ERROR_TITLE, ERROR_FALLBACK)
    }
}
