use super::envelope::id_string;
use crate::validation::{DIGITS, PHONE};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Empresa tal como la devuelve el backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    #[serde(rename = "idempresa", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "razonsocial", default)]
    pub legal_name: String,
    #[serde(rename = "ruc", default)]
    pub tax_id: String,
    #[serde(rename = "contacto", default)]
    pub contact_name: String,
    #[serde(rename = "telefono", default)]
    pub phone: String,
}

/// Payload de `POST /v1/empresa` (valores ya normalizados)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct CreateCompanyRequest {
    #[serde(rename = "razonsocial")]
    #[validate(length(min = 3, max = 100, message = "La razón social debe tener al menos 3 caracteres"))]
    pub legal_name: String,
    #[serde(rename = "ruc")]
    #[validate(
        length(min = 13, max = 13, message = "El RUC debe tener 13 dígitos"),
        regex(path = *DIGITS, message = "El RUC solo debe contener números")
    )]
    pub tax_id: String,
    #[serde(rename = "contacto")]
    #[validate(length(min = 3, max = 100, message = "El nombre de contacto debe tener al menos 3 caracteres"))]
    pub contact_name: String,
    #[serde(rename = "telefono")]
    #[validate(
        length(min = 10, max = 10, message = "El teléfono debe tener al menos 10 dígitos"),
        regex(path = *PHONE, message = "El teléfono contiene caracteres inválidos")
    )]
    pub phone: String,
}

/// Payload parcial de `PATCH /v1/empresa/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateCompanyRequest {
    #[serde(rename = "razonsocial", skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(rename = "ruc", skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(rename = "contacto", skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
