use super::envelope::id_string;
use serde::{Deserialize, Serialize};

/// Rol disponible (solo lectura)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Role {
    #[serde(rename = "idrol", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
