use super::{fetch_data, ApiClient, ApiError};
use crate::models::Role;

const ROLE_PATH: &str = "/v1/roles";

#[derive(Clone)]
pub struct RoleService {
    api: ApiClient,
}

impl RoleService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Obtener todos los roles disponibles
    pub async fn list(&self) -> Result<Vec<Role>, ApiError> {
        let roles: Vec<Role> = fetch_data(self.api.get(ROLE_PATH), "obtener roles").await?;
        log::info!("✅ Roles obtenidos: {}", roles.len());
        Ok(roles)
    }
}
