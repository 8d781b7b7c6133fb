// ============================================================================
// VALIDATION - Reglas de formulario (síncronas, antes de cualquier request)
// ============================================================================
// Cada formulario produce o bien el payload normalizado, o bien un mapa
// campo -> mensaje. Nunca ambos: con un solo error no hay llamada de red.
// ============================================================================

pub mod company;
pub mod login;
pub mod user;

pub use company::{validate_company, CompanyForm};
pub use login::{validate_login, LoginForm};
pub use user::{validate_user, UserForm};

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use validator::{Validate, ValidationError};

lazy_static! {
    pub(crate) static ref DIGITS: Regex = Regex::new(r"^[0-9]+$").expect("regex de dígitos");
    pub(crate) static ref PHONE: Regex = Regex::new(r"^[0-9+\-\s()]+$").expect("regex de teléfono");
    // Sin punto inicial, sin "..", dominio con TLD
    pub(crate) static ref EMAIL: Regex = Regex::new(
        r"^[A-Za-z0-9_'+\-]([A-Za-z0-9_'+\-]|\.[A-Za-z0-9_'+\-])*@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$"
    )
    .expect("regex de email");
}

/// Errores por campo, uno por campo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra el error de un campo; conserva el primero si ya existe
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    /// Traduce el reporte de `validator` a un mensaje por campo.
    /// `max_messages` da el texto de "demasiado largo" de cada campo; el
    /// mensaje del atributo `length` es el de "demasiado corto".
    pub(crate) fn from_report(
        report: &validator::ValidationErrors,
        max_messages: &[(&str, &str)],
    ) -> Self {
        let mut errors = Self::new();
        for (field, failures) in report.field_errors() {
            let field = field.to_string();
            // Longitud antes que patrón, como en el formulario
            let Some(failure) = failures.iter().min_by_key(|f| f.code != "length") else {
                continue;
            };
            let over_max = max_messages
                .iter()
                .find(|(name, _)| *name == field)
                .filter(|_| exceeds_max(failure))
                .map(|(_, message)| message.to_string());
            let message = over_max
                .or_else(|| failure.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| failure.code.to_string());
            errors.add(field, message);
        }
        errors
    }
}

/// `true` si el error de longitud se debe a superar `max`
fn exceeds_max(failure: &ValidationError) -> bool {
    if failure.code != "length" {
        return false;
    }
    let max = failure.params.get("max").and_then(Value::as_u64);
    let len = failure
        .params
        .get("value")
        .and_then(Value::as_str)
        .map(|value| value.chars().count() as u64);
    matches!((len, max), (Some(len), Some(max)) if len > max)
}

/// Valida un payload ya normalizado
pub(crate) fn check<T: Validate>(
    request: T,
    max_messages: &[(&str, &str)],
) -> Result<T, ValidationErrors> {
    match request.validate() {
        Ok(()) => Ok(request),
        Err(report) => Err(ValidationErrors::from_report(&report, max_messages)),
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self
            .fields
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", joined.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL_MESSAGE: &str = "Debe ser un email válido";

    #[derive(Debug, Validate)]
    struct Sample {
        #[validate(
            length(min = 10, max = 10, message = "El teléfono debe tener al menos 10 dígitos"),
            regex(path = *PHONE, message = "El teléfono contiene caracteres inválidos")
        )]
        phone: String,
        #[validate(
            email(message = "Debe ser un email válido"),
            regex(path = *EMAIL, message = "Debe ser un email válido")
        )]
        email: String,
    }

    const MAX: &[(&str, &str)] = &[("phone", "El teléfono no puede exceder 10 dígitos")];

    fn sample(phone: &str, email: &str) -> Sample {
        Sample {
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_phone_bounds_and_charset() {
        assert!(check(sample("0991234567", "a@b.ec"), MAX).is_ok());
        assert!(check(sample("09 123-456", "a@b.ec"), MAX).is_ok());

        let short = check(sample("099123456", "a@b.ec"), MAX).unwrap_err();
        assert_eq!(short.get("phone"), Some("El teléfono debe tener al menos 10 dígitos"));

        let long = check(sample("09912345678", "a@b.ec"), MAX).unwrap_err();
        assert_eq!(long.get("phone"), Some("El teléfono no puede exceder 10 dígitos"));

        let letters = check(sample("09912a4567", "a@b.ec"), MAX).unwrap_err();
        assert_eq!(letters.get("phone"), Some("El teléfono contiene caracteres inválidos"));
    }

    #[test]
    fn test_length_wins_over_pattern() {
        let errors = check(sample("12a", "a@b.ec"), MAX).unwrap_err();
        assert_eq!(errors.get("phone"), Some("El teléfono debe tener al menos 10 dígitos"));
    }

    #[test]
    fn test_email_shapes() {
        assert!(check(sample("0991234567", "ana.perez@empresa.com"), MAX).is_ok());
        for bad in ["ana@", "ana@empresa", ".ana@empresa.com", "ana..perez@empresa.com", ""] {
            let errors = check(sample("0991234567", bad), MAX).unwrap_err();
            assert_eq!(errors.get("email"), Some(EMAIL_MESSAGE), "aceptó {:?}", bad);
        }
    }

    #[test]
    fn test_errors_keep_first_message_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add("tax_id", "primero");
        errors.add("tax_id", "segundo");
        assert_eq!(errors.get("tax_id"), Some("primero"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.to_string(), "tax_id: primero");
    }
}
