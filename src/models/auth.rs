use super::envelope::id_string;
use crate::validation::EMAIL;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Validate)]
pub struct LoginCredentials {
    #[validate(
        email(message = "Debe ser un email válido"),
        regex(path = *EMAIL, message = "Debe ser un email válido")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "La contraseña es requerida"))]
    pub password: String,
}

/// Snapshot del usuario autenticado (se persiste en `authUsuario`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthUser {
    #[serde(rename = "idusuario", deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "nombres", default)]
    pub given_names: String,
    #[serde(rename = "apellidos", default)]
    pub surnames: String,
    #[serde(default, deserialize_with = "id_string")]
    pub role: String,
    #[serde(rename = "empresa", default, deserialize_with = "id_string")]
    pub company: String,
}

/// `data` de la respuesta de `POST /v1/auth`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginData {
    pub token: String,
    #[serde(rename = "usuario")]
    pub user: AuthUser,
}
