use super::{check, ValidationErrors};
use crate::models::CreateUserRequest;

// Claves de error: nombres de campo de `CreateUserRequest`
pub const FIELD_NATIONAL_ID: &str = "national_id";
pub const FIELD_GIVEN_NAMES: &str = "given_names";
pub const FIELD_SURNAMES: &str = "surnames";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_ADDRESS: &str = "address";
pub const FIELD_ROLE: &str = "role";
pub const FIELD_COMPANY: &str = "company";

const MAX_MESSAGES: &[(&str, &str)] = &[
    (FIELD_NATIONAL_ID, "La identificación no puede exceder 10 caracteres"),
    (FIELD_GIVEN_NAMES, "El nombre no puede exceder 50 caracteres"),
    (FIELD_SURNAMES, "Los apellidos no pueden exceder 50 caracteres"),
    (FIELD_PASSWORD, "La contraseña no puede exceder 20 caracteres"),
    (FIELD_PHONE, "El teléfono no puede exceder 10 dígitos"),
    (FIELD_ADDRESS, "La dirección no puede exceder 200 caracteres"),
];

/// Valores crudos del formulario de registro de usuario
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub national_id: String,
    pub given_names: String,
    pub surnames: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub address: String,
    pub role: String,
    pub company: String,
}

impl UserForm {
    /// Formulario vacío con la empresa ya resuelta
    pub fn for_company(company_id: impl Into<String>) -> Self {
        Self {
            company: company_id.into(),
            ..Self::default()
        }
    }
}

/// Valida y normaliza el formulario de usuario.
/// La contraseña, el rol y la empresa se envían tal cual.
pub fn validate_user(form: &UserForm) -> Result<CreateUserRequest, ValidationErrors> {
    let request = CreateUserRequest {
        national_id: form.national_id.trim().to_string(),
        given_names: form.given_names.trim().to_string(),
        surnames: form.surnames.trim().to_string(),
        email: form.email.trim().to_lowercase(),
        password: form.password.clone(),
        phone: form.phone.trim().to_string(),
        address: form.address.trim().to_string(),
        role: form.role.clone(),
        company: form.company.clone(),
    };
    check(request, MAX_MESSAGES)
}
