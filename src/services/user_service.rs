use super::{fetch_data, ApiClient, ApiError};
use crate::models::{CreateUserRequest, User};

const USER_PATH: &str = "/v1/usuarios";

#[derive(Clone)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Crear un nuevo usuario
    pub async fn create(&self, request: &CreateUserRequest) -> Result<User, ApiError> {
        log::info!("👤 Creando usuario: {} (empresa {})", request.email, request.company);
        let user: User = fetch_data(self.api.post(USER_PATH, request), "crear usuario").await?;
        log::info!("✅ Usuario creado: {} {}", user.given_names, user.surnames);
        Ok(user)
    }

    /// Obtener todos los usuarios
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        fetch_data(self.api.get(USER_PATH), "obtener usuarios").await
    }
}
