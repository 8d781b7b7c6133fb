// ============================================================================
// API CLIENT - Gateway HTTP único (Stateless)
// ============================================================================
// URL base fija, timeout acotado, cabeceras JSON. Dos puntos de intercepción:
// - Salida: token Bearer (placeholder, sin fuente de token por defecto)
// - Entrada: clasifica y registra cada fallo antes de devolverlo intacto
// Sin reintentos: los fallos llegan al llamador de inmediato.
// ============================================================================

use super::transport::{FetchTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::config::CONFIG;
use serde::Serialize;
use std::rc::Rc;

/// Proveedor de token para la cabecera `Authorization`
pub type TokenSource = Rc<dyn Fn() -> Option<String>>;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
    transport: Rc<dyn HttpTransport>,
    token_source: Option<TokenSource>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_transport(Rc::new(FetchTransport))
    }

    /// Cliente con la configuración global y un transporte inyectado
    pub fn with_transport(transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: CONFIG.api_base_url.clone(),
            timeout_ms: CONFIG.request_timeout_ms,
            transport,
            token_source: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Activa la inyección del token Bearer en cada petición
    pub fn with_token_source(mut self, token_source: TokenSource) -> Self {
        self.token_source = Some(token_source);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    pub async fn get(&self, path: &str) -> Result<HttpResponse, TransportError> {
        self.execute(HttpMethod::Get, path, None).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<HttpResponse, TransportError> {
        let json = self.serialize(body)?;
        self.execute(HttpMethod::Post, path, Some(json)).await
    }

    pub async fn patch<B: Serialize>(&self, path: &str, body: &B) -> Result<HttpResponse, TransportError> {
        let json = self.serialize(body)?;
        self.execute(HttpMethod::Patch, path, Some(json)).await
    }

    pub async fn delete(&self, path: &str) -> Result<HttpResponse, TransportError> {
        self.execute(HttpMethod::Delete, path, None).await
    }

    fn serialize<B: Serialize>(&self, body: &B) -> Result<String, TransportError> {
        serde_json::to_string(body).map_err(|e| {
            let error = TransportError::Build(format!("Serialization error: {}", e));
            log_failure(&error);
            error
        })
    }

    async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<HttpResponse, TransportError> {
        let mut request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
            body,
            timeout_ms: self.timeout_ms,
        };
        self.authorize(&mut request);

        log::debug!("🌐 {:?} {}", request.method, request.url);

        let result = match self.transport.send(request).await {
            Ok(response) if response.ok() => Ok(response),
            Ok(response) => Err(TransportError::Response {
                status: response.status,
                body: response.body,
            }),
            Err(error) => Err(error),
        };

        if let Err(error) = &result {
            log_failure(error);
        }
        result
    }

    /// Interceptor de salida
    fn authorize(&self, request: &mut HttpRequest) {
        let token = self.token_source.as_ref().and_then(|source| source());
        if let Some(token) = token {
            request
                .headers
                .push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Interceptor de entrada: un registro distinto por clase de fallo
fn log_failure(error: &TransportError) {
    match error {
        TransportError::Response { status, body } => {
            log::error!("❌ Error de respuesta: {}", body);
            log::error!("❌ Estado: {}", status);
        }
        TransportError::NoResponse(reason) => {
            log::error!("📡 Error de red (sin respuesta): {}", reason);
        }
        TransportError::Timeout(ms) => {
            log::error!("📡 Error de red (timeout de {} ms)", ms);
        }
        TransportError::Build(reason) => {
            log::error!("⚠️ Error configurando la petición: {}", reason);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Transporte falso: devuelve respuestas en orden y guarda las peticiones
    #[derive(Default)]
    pub struct ScriptedTransport {
        pub responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
        pub requests: RefCell<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        pub fn reply(self: Rc<Self>, status: u16, body: &str) -> Rc<Self> {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(self: Rc<Self>, error: TransportError) -> Rc<Self> {
            self.responses.borrow_mut().push_back(Err(error));
            self
        }

        pub fn last_request(&self) -> HttpRequest {
            self.requests.borrow().last().cloned().expect("sin peticiones")
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for ScriptedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::NoResponse("sin respuesta programada".to_string())))
        }
    }

    pub fn client(transport: &Rc<ScriptedTransport>) -> ApiClient {
        // Fijos: no dependen de las variables de compilación
        ApiClient::with_transport(transport.clone())
            .with_base_url("http://test.local/api")
            .with_timeout_ms(10_000)
    }
}
