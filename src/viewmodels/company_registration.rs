use super::{Notification, SubmissionGuard, SubmitError};
use crate::models::Company;
use crate::navigation::{route_after_company_created, Route};
use crate::services::{ApiClient, CompanyService};
use crate::state::CompanyState;
use crate::validation::{validate_company, CompanyForm};

pub const ERROR_TITLE: &str = "Error al crear empresa";
pub const ERROR_FALLBACK: &str = "No se pudo crear la empresa. Intente nuevamente.";

/// Resultado de un registro de empresa exitoso
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRegistered {
    pub company: Company,
    pub notification: Notification,
    pub next: Route,
}

pub struct CompanyRegistrationViewModel {
    service: CompanyService,
    company_state: CompanyState,
    guard: SubmissionGuard,
}

impl CompanyRegistrationViewModel {
    pub fn new(api: ApiClient, company_state: CompanyState) -> Self {
        Self {
            service: CompanyService::new(api),
            company_state,
            guard: SubmissionGuard::new(),
        }
    }

    pub fn guard(&self) -> &SubmissionGuard {
        &self.guard
    }

    /// Valida, crea la empresa y la guarda como empresa activa
    pub async fn submit(&self, form: &CompanyForm) -> Result<CompanyRegistered, SubmitError> {
        let request = validate_company(form).map_err(SubmitError::Validation)?;
        let ticket = self.guard.begin().ok_or(SubmitError::Busy)?;

        let result = self.service.create(&request).await;
        if !ticket.is_current() {
            log::warn!("⚠️ Respuesta de empresa descartada: la pantalla ya no está activa");
            return Err(SubmitError::Cancelled);
        }
        let company = result?;

        // El flujo sigue aunque falle la persistencia
        if let Err(e) = self.company_state.set_company(&company.id, &company.legal_name) {
            log::warn!("⚠️ Empresa creada pero no persistida: {}", e);
        }

        Ok(CompanyRegistered {
            notification: Notification::success(
                "¡Empresa creada exitosamente!",
                format!("{} ha sido registrada", company.legal_name),
            ),
            next: route_after_company_created(&company),
            company,
        })
    }

    pub fn error_notification(error: &SubmitError) -> Option<Notification> {
        Notification::for_submit_error(error, ERROR_TITLE, ERROR_FALLBACK)
    }
}
