use super::{fetch_data, fetch_unit, ApiClient, ApiError};
use crate::models::{Company, CreateCompanyRequest, UpdateCompanyRequest};

const COMPANY_PATH: &str = "/v1/empresa";

/// Servicio de empresas. Solo `create` lo usa una pantalla; el resto
/// forma parte del contrato público del servicio.
#[derive(Clone)]
pub struct CompanyService {
    api: ApiClient,
}

impl CompanyService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Crear una nueva empresa
    pub async fn create(&self, request: &CreateCompanyRequest) -> Result<Company, ApiError> {
        log::info!("🏢 Creando empresa: {}", request.legal_name);
        let company: Company = fetch_data(self.api.post(COMPANY_PATH, request), "crear empresa").await?;
        log::info!("✅ Empresa creada: {} ({})", company.legal_name, company.id);
        Ok(company)
    }

    /// Listar empresas
    pub async fn list(&self) -> Result<Vec<Company>, ApiError> {
        fetch_data(self.api.get(COMPANY_PATH), "obtener empresas").await
    }

    /// Obtener una empresa por ID
    pub async fn get(&self, id: &str) -> Result<Company, ApiError> {
        let path = format!("{}/{}", COMPANY_PATH, id);
        fetch_data(self.api.get(&path), "obtener empresa").await
    }

    /// Actualizar campos de una empresa
    pub async fn update(&self, id: &str, changes: &UpdateCompanyRequest) -> Result<Company, ApiError> {
        let path = format!("{}/{}", COMPANY_PATH, id);
        fetch_data(self.api.patch(&path, changes), "actualizar empresa").await
    }

    /// Eliminar una empresa
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("{}/{}", COMPANY_PATH, id);
        fetch_unit(self.api.delete(&path), "eliminar empresa").await?;
        log::info!("🗑️ Empresa eliminada: {}", id);
        Ok(())
    }
}
