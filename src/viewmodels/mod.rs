// ============================================================================
// VIEWMODELS - Flujo de envío de cada pantalla
// ============================================================================
// validar -> llamar al servicio -> actualizar el store -> devolver el aviso
// Las pantallas solo renderizan lo que devuelven.
// ============================================================================

pub mod company_registration;
pub mod login;
pub mod notification;
pub mod submission;
pub mod user_registration;

pub use company_registration::{CompanyRegistered, CompanyRegistrationViewModel};
pub use login::{LoggedIn, LoginViewModel};
pub use notification::{Notification, NotificationKind};
pub use submission::{SubmissionGuard, SubmissionTicket};
pub use user_registration::{UserRegistered, UserRegistrationViewModel};

use crate::services::ApiError;
use crate::validation::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// Errores por campo; no hubo llamada de red
    #[error("Formulario inválido: {0}")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Ya hay un envío en curso")]
    Busy,
    /// La pantalla se cerró antes de la respuesta
    #[error("Envío cancelado")]
    Cancelled,
}
