use super::transport::{HttpResponse, TransportError};
use crate::models::Envelope;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Errores que ven los llamadores de los servicios
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 2xx pero sin `{ success: true, data }`
    #[error("Formato de respuesta inesperado del servidor")]
    UnexpectedResponseFormat,
    /// El cuerpo de error traía un mensaje legible
    #[error("{0}")]
    Server(String),
    /// Fallo original, sin mensaje extraíble
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ApiError {
    /// Convierte un fallo de transporte, extrayendo el mensaje del servidor si lo hay
    pub fn from_transport(error: TransportError) -> Self {
        if let TransportError::Response { body, .. } = &error {
            if let Some(message) = extract_server_message(body) {
                return ApiError::Server(message);
            }
        }
        ApiError::Transport(error)
    }

    /// Mensaje que se puede mostrar tal cual al usuario; `None` si no hay ninguno útil
    pub fn user_message(&self) -> Option<String> {
        match self {
            ApiError::Server(message) => Some(message.clone()),
            ApiError::UnexpectedResponseFormat => Some(self.to_string()),
            ApiError::Transport(TransportError::Response { status, .. }) => {
                Some(format!("La solicitud falló con el código {}", status))
            }
            ApiError::Transport(TransportError::Build(_)) => None,
            ApiError::Transport(other) => Some(other.to_string()),
        }
    }
}

/// Busca `message` o `response.message` en un cuerpo de error JSON.
/// Una lista de mensajes se une con ", ".
pub fn extract_server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    // Texto o lista de textos (errores de validación del backend)
    let non_empty = |v: Option<&Value>| {
        let text = match v? {
            Value::String(message) => message.clone(),
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .filter(|m| !m.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
            _ => return None,
        };
        Some(text).filter(|m| !m.is_empty())
    };

    non_empty(value.get("message"))
        .or_else(|| non_empty(value.get("response").and_then(|r| r.get("message"))))
}

/// Desenvuelve `{ success: true, data }`; cualquier otra forma es `UnexpectedResponseFormat`
pub fn unwrap_envelope<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    let envelope: Envelope<T> = serde_json::from_str(&response.body).map_err(|e| {
        log::warn!("⚠️ Respuesta no interpretable ({}): {}", response.status, e);
        ApiError::UnexpectedResponseFormat
    })?;
    envelope.into_data().ok_or(ApiError::UnexpectedResponseFormat)
}

/// Como `unwrap_envelope`, pero solo exige `success: true` (operaciones sin `data`)
pub fn expect_success(response: &HttpResponse) -> Result<(), ApiError> {
    let envelope: Envelope<Value> =
        serde_json::from_str(&response.body).map_err(|_| ApiError::UnexpectedResponseFormat)?;
    if envelope.success {
        Ok(())
    } else {
        Err(ApiError::UnexpectedResponseFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> TransportError {
        TransportError::Response {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_top_level_message_wins() {
        let error = ApiError::from_transport(response(400, r#"{"message":"X","response":{"message":"Y"}}"#));
        assert_eq!(error, ApiError::Server("X".to_string()));
    }

    #[test]
    fn test_message_list_is_joined() {
        let error = ApiError::from_transport(response(
            400,
            r#"{"message":["ruc must be 13 chars","telefono must be a string"],"error":"Bad Request","statusCode":400}"#,
        ));
        assert_eq!(
            error,
            ApiError::Server("ruc must be 13 chars, telefono must be a string".to_string())
        );

        let nested = ApiError::from_transport(response(400, r#"{"response":{"message":["RUC duplicado"]}}"#));
        assert_eq!(nested, ApiError::Server("RUC duplicado".to_string()));
    }

    #[test]
    fn test_empty_message_list_keeps_transport_error() {
        let original = response(400, r#"{"message":[]}"#);
        assert_eq!(ApiError::from_transport(original.clone()), ApiError::Transport(original));
    }

    #[test]
    fn test_nested_response_message() {
        let error = ApiError::from_transport(response(409, r#"{"response":{"success":false,"message":"Y"},"status":409}"#));
        assert_eq!(error, ApiError::Server("Y".to_string()));
    }

    #[test]
    fn test_without_message_keeps_original_failure() {
        let original = response(500, "<html>Internal Server Error</html>");
        assert_eq!(
            ApiError::from_transport(original.clone()),
            ApiError::Transport(original)
        );

        let empty = response(400, r#"{"message":""}"#);
        assert_eq!(ApiError::from_transport(empty.clone()), ApiError::Transport(empty));

        let network = TransportError::NoResponse("connection refused".to_string());
        assert_eq!(
            ApiError::from_transport(network.clone()),
            ApiError::Transport(network)
        );
    }

    #[test]
    fn test_unwrap_envelope_contract() {
        let ok = HttpResponse {
            status: 200,
            body: r#"{"success":true,"message":"ok","data":[1,2,3]}"#.to_string(),
        };
        assert_eq!(unwrap_envelope::<Vec<u32>>(&ok).unwrap(), vec![1, 2, 3]);

        for body in [r#"{"success":false,"data":[1]}"#, r#"{"success":true}"#, "no es json", r#"{"success":true,"data":"x"}"#] {
            let response = HttpResponse {
                status: 201,
                body: body.to_string(),
            };
            assert_eq!(
                unwrap_envelope::<Vec<u32>>(&response).unwrap_err(),
                ApiError::UnexpectedResponseFormat
            );
        }
    }

    #[test]
    fn test_user_message_hides_raw_bodies() {
        let error = ApiError::from_transport(response(502, "<html>Bad Gateway</html>"));
        assert_eq!(error.user_message().as_deref(), Some("La solicitud falló con el código 502"));
        assert_eq!(ApiError::Transport(TransportError::Build("x".into())).user_message(), None);
        assert_eq!(
            ApiError::Server("RUC duplicado".into()).user_message().as_deref(),
            Some("RUC duplicado")
        );
    }

    #[test]
    fn test_expect_success_ignores_missing_data() {
        let response = HttpResponse {
            status: 200,
            body: r#"{"success":true,"message":"eliminada"}"#.to_string(),
        };
        assert!(expect_success(&response).is_ok());
    }
}
