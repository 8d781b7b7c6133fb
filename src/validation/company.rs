use super::{check, ValidationErrors};
use crate::models::CreateCompanyRequest;

// Claves de error: nombres de campo de `CreateCompanyRequest`
pub const FIELD_LEGAL_NAME: &str = "legal_name";
pub const FIELD_TAX_ID: &str = "tax_id";
pub const FIELD_CONTACT_NAME: &str = "contact_name";
pub const FIELD_PHONE: &str = "phone";

const MAX_MESSAGES: &[(&str, &str)] = &[
    (FIELD_LEGAL_NAME, "La razón social no puede exceder 100 caracteres"),
    (FIELD_TAX_ID, "El RUC debe tener 13 dígitos"),
    (FIELD_CONTACT_NAME, "El nombre de contacto no puede exceder 100 caracteres"),
    (FIELD_PHONE, "El teléfono no puede exceder 10 dígitos"),
];

/// Valores crudos del formulario de registro de empresa
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyForm {
    pub legal_name: String,
    pub tax_id: String,
    pub contact_name: String,
    pub phone: String,
}

/// Valida y normaliza el formulario de empresa
pub fn validate_company(form: &CompanyForm) -> Result<CreateCompanyRequest, ValidationErrors> {
    let request = CreateCompanyRequest {
        legal_name: form.legal_name.trim().to_string(),
        tax_id: form.tax_id.trim().to_string(),
        contact_name: form.contact_name.trim().to_string(),
        phone: form.phone.trim().to_string(),
    };
    check(request, MAX_MESSAGES)
}
