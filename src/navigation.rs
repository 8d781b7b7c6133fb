// ============================================================================
// NAVIGATION - Flujo lineal: empresa -> usuario -> login
// ============================================================================

use crate::models::Company;
use crate::state::CompanyState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    CreateCompany,
    /// Registro de usuario para una empresa ya resuelta
    CreateUser { company_id: String },
    Login,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::CreateCompany => "Registro de Empresa",
            Route::CreateUser { .. } => "Registro de Usuario",
            Route::Login => "Iniciar Sesión",
        }
    }
}

/// Pantalla inicial según la empresa guardada (llamar después de `CompanyState::load`)
pub fn initial_route(company_state: &CompanyState) -> Route {
    match company_state.company_id() {
        Some(company_id) => Route::CreateUser { company_id },
        None => Route::CreateCompany,
    }
}

/// Siguiente pantalla tras crear la empresa
pub fn route_after_company_created(company: &Company) -> Route {
    Route::CreateUser {
        company_id: company.id.clone(),
    }
}
