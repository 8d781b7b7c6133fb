// ============================================================================
// TRANSPORT - Envío HTTP crudo (gloo-net en el navegador)
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;
use web_sys::AbortController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout_ms: u32,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fallo de transporte, clasificado igual que lo registra el gateway
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// El servidor respondió con un estado fuera de 2xx
    #[error("HTTP {status}: {body}")]
    Response { status: u16, body: String },
    /// La petición salió pero no hubo respuesta
    #[error("Error de red: {0}")]
    NoResponse(String),
    #[error("Tiempo de espera agotado ({0} ms)")]
    Timeout(u32),
    /// La petición no se pudo construir
    #[error("Error construyendo la petición: {0}")]
    Build(String),
}

/// Punto de inyección del envío HTTP
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Envía la petición. Cualquier estado HTTP es `Ok`; el gateway decide.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Transporte real: fetch del navegador vía gloo-net, con timeout por AbortController
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

/// Fallo sin respuesta utilizable: timeout si lo abortó nuestro temporizador
fn network_failure(timed_out: bool, timeout_ms: u32, reason: String) -> TransportError {
    if timed_out {
        TransportError::Timeout(timeout_ms)
    } else {
        TransportError::NoResponse(reason)
    }
}

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let controller = AbortController::new()
            .map_err(|e| TransportError::Build(format!("AbortController: {:?}", e)))?;

        // Se cancela al salir de esta función (drop)
        let timed_out = Rc::new(Cell::new(false));
        let _timeout = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            Timeout::new(request.timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Patch => Request::patch(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        };
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        let signal = controller.signal();
        builder = builder.abort_signal(Some(&signal));

        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::Build(e.to_string()))?;

        let response = built
            .send()
            .await
            .map_err(|e| network_failure(timed_out.get(), request.timeout_ms, e.to_string()))?;

        // El abort también puede llegar mientras se lee el cuerpo
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| network_failure(timed_out.get(), request.timeout_ms, e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
