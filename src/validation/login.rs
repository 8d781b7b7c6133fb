use super::{check, ValidationErrors};
use crate::models::LoginCredentials;

pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Valida las credenciales de login (email válido, contraseña no vacía)
pub fn validate_login(form: &LoginForm) -> Result<LoginCredentials, ValidationErrors> {
    let credentials = LoginCredentials {
        email: form.email.trim().to_lowercase(),
        password: form.password.clone(),
    };
    check(credentials, &[])
}
