use super::envelope::{id_string, optional_id_string};
use crate::validation::{EMAIL, PHONE};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Usuario registrado en el backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "identificacion", default)]
    pub national_id: String,
    #[serde(rename = "nombres", default)]
    pub given_names: String,
    #[serde(rename = "apellidos", default)]
    pub surnames: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "telefono", default)]
    pub phone: String,
    #[serde(rename = "direccion", default)]
    pub address: String,
    #[serde(default, deserialize_with = "id_string")]
    pub role: String,
    #[serde(rename = "empresa", default, deserialize_with = "id_string")]
    pub company: String,
    #[serde(
        rename = "idusuario",
        default,
        deserialize_with = "optional_id_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
}

/// Payload de `POST /v1/usuarios`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct CreateUserRequest {
    #[serde(rename = "identificacion")]
    #[validate(length(min = 10, max = 10, message = "La identificación debe tener al menos 10 caracteres"))]
    pub national_id: String,
    #[serde(rename = "nombres")]
    #[validate(length(min = 2, max = 50, message = "El nombre debe tener al menos 2 caracteres"))]
    pub given_names: String,
    #[serde(rename = "apellidos")]
    #[validate(length(min = 2, max = 50, message = "Los apellidos deben tener al menos 2 caracteres"))]
    pub surnames: String,
    #[validate(
        email(message = "Debe ser un email válido"),
        regex(path = *EMAIL, message = "Debe ser un email válido")
    )]
    pub email: String,
    #[validate(length(min = 6, max = 20, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub password: String,
    #[serde(rename = "telefono")]
    #[validate(
        length(min = 10, max = 10, message = "El teléfono debe tener al menos 10 dígitos"),
        regex(path = *PHONE, message = "El teléfono contiene caracteres inválidos")
    )]
    pub phone: String,
    #[serde(rename = "direccion")]
    #[validate(length(min = 5, max = 200, message = "La dirección debe tener al menos 5 caracteres"))]
    pub address: String,
    #[validate(length(min = 1, message = "Debe seleccionar un rol"))]
    pub role: String,
    #[serde(rename = "empresa")]
    #[validate(length(min = 1, message = "Debe tener un ID de empresa válido"))]
    pub company: String,
}
