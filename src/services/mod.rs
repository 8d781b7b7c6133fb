pub mod api_client;
pub mod auth_service;
pub mod company_service;
pub mod error;
pub mod role_service;
pub mod transport;
pub mod user_service;

pub use api_client::{ApiClient, TokenSource};
pub use auth_service::AuthService;
pub use company_service::CompanyService;
pub use error::{extract_server_message, ApiError};
pub use role_service::RoleService;
pub use transport::{FetchTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
pub use user_service::UserService;

use serde::de::DeserializeOwned;
use std::future::Future;

/// Espera la respuesta del gateway y desenvuelve el sobre `{ success, data }`.
/// `context` solo se usa para el registro del error.
pub(crate) async fn fetch_data<T, F>(pending: F, context: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    F: Future<Output = Result<HttpResponse, TransportError>>,
{
    let result = match pending.await {
        Ok(response) => error::unwrap_envelope(&response),
        Err(failure) => Err(ApiError::from_transport(failure)),
    };
    if let Err(e) = &result {
        log::error!("❌ Error al {}: {}", context, e);
    }
    result
}

/// Igual que `fetch_data` para operaciones que no devuelven `data`
pub(crate) async fn fetch_unit<F>(pending: F, context: &str) -> Result<(), ApiError>
where
    F: Future<Output = Result<HttpResponse, TransportError>>,
{
    let result = match pending.await {
        Ok(response) => error::expect_success(&response),
        Err(failure) => Err(ApiError::from_transport(failure)),
    };
    if let Err(e) = &result {
        log::error!("❌ Error al {}: {}", context, e);
    }
    result
}
