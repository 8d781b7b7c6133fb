use super::{fetch_data, ApiClient, ApiError};
use crate::models::{LoginCredentials, LoginData};

const AUTH_PATH: &str = "/v1/auth";

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Iniciar sesión con email y contraseña
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginData, ApiError> {
        log::info!("🔐 Intentando login con: {}", credentials.email);
        let data: LoginData = fetch_data(self.api.post(AUTH_PATH, credentials), "iniciar sesión").await?;
        log::info!("✅ Login exitoso: {}", data.user.email);
        Ok(data)
    }
}
