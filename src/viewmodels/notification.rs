use super::SubmitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Aviso para el usuario (título + mensaje)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Aviso de error de un envío. Validación, envío ocupado y cancelación
    /// no generan aviso: se muestran en el formulario o se ignoran.
    pub fn for_submit_error(error: &SubmitError, title: &str, fallback: &str) -> Option<Self> {
        match error {
            SubmitError::Api(api_error) => {
                let message = api_error.user_message().unwrap_or_else(|| fallback.to_string());
                Some(Self::error(title, message))
            }
            SubmitError::Validation(_) | SubmitError::Busy | SubmitError::Cancelled => None,
        }
    }
}
