// ============================================================================
// AUTH STATE - Sesión autenticada (token + snapshot del usuario)
// ============================================================================

use crate::models::AuthUser;
use crate::utils::{write_all, KeyValueStorage, StorageError};
use std::cell::RefCell;
use std::rc::Rc;

pub const STORAGE_KEY_TOKEN: &str = "authToken";
pub const STORAGE_KEY_USER: &str = "authUsuario";

/// Estado de autenticación
#[derive(Clone)]
pub struct AuthState {
    storage: Rc<dyn KeyValueStorage>,
    pub token: Rc<RefCell<Option<String>>>,
    pub user: Rc<RefCell<Option<AuthUser>>>,
}

impl AuthState {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            token: Rc::new(RefCell::new(None)),
            user: Rc::new(RefCell::new(None)),
        }
    }

    /// Persiste token y usuario; la memoria se actualiza solo si ambos se escriben
    pub fn set_auth(&self, token: &str, user: &AuthUser) -> Result<(), StorageError> {
        let user_json = serde_json::to_string(user).map_err(|e| StorageError::Write {
            key: STORAGE_KEY_USER.to_string(),
            reason: e.to_string(),
        });

        let written = user_json.and_then(|json| {
            write_all(
                self.storage.as_ref(),
                &[(STORAGE_KEY_TOKEN, token), (STORAGE_KEY_USER, json.as_str())],
            )
        });

        if let Err(e) = written {
            log::error!("❌ Error al guardar autenticación: {}", e);
            return Err(e);
        }

        *self.token.borrow_mut() = Some(token.to_string());
        *self.user.borrow_mut() = Some(user.clone());
        log::info!("✅ Autenticación guardada para {}", user.email);
        Ok(())
    }

    /// Carga la sesión guardada; ausente o ilegible = sin sesión
    pub fn load(&self) {
        let read = |key: &str| match self.storage.get_item(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                log::warn!("⚠️ Error al cargar autenticación: {}", e);
                None
            }
        };

        let (Some(token), Some(user_json)) = (read(STORAGE_KEY_TOKEN), read(STORAGE_KEY_USER)) else {
            return;
        };

        match serde_json::from_str::<AuthUser>(&user_json) {
            Ok(user) => {
                log::info!("✅ Autenticación cargada: {}", user.email);
                *self.token.borrow_mut() = Some(token);
                *self.user.borrow_mut() = Some(user);
            }
            Err(e) => log::warn!("⚠️ Usuario guardado ilegible: {}", e),
        }
    }

    /// Logout - limpiar todo
    pub fn clear(&self) -> Result<(), StorageError> {
        let removed = self
            .storage
            .remove_item(STORAGE_KEY_TOKEN)
            .and_then(|_| self.storage.remove_item(STORAGE_KEY_USER));

        if let Err(e) = removed {
            log::error!("❌ Error al limpiar autenticación: {}", e);
            return Err(e);
        }

        *self.token.borrow_mut() = None;
        *self.user.borrow_mut() = None;
        log::info!("✅ Autenticación limpiada");
        Ok(())
    }

    pub fn get_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn get_user(&self) -> Option<AuthUser> {
        self.user.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::testing::{FailingKeyStorage, ReadOnlyStorage};
    use crate::utils::MemoryStorage;

    fn user() -> AuthUser {
        AuthUser {
            id: "u1".to_string(),
            email: "ana@correo.ec".to_string(),
            given_names: "Ana".to_string(),
            surnames: "Pérez".to_string(),
            role: "r1".to_string(),
            company: "emp-1".to_string(),
        }
    }

    #[test]
    fn test_session_round_trip_through_storage() {
        let storage = MemoryStorage::new();
        let state = AuthState::new(Rc::new(storage.clone()));
        state.set_auth("jwt", &user()).unwrap();
        assert!(state.is_logged_in());

        let stored = storage.get_item(STORAGE_KEY_USER).unwrap().unwrap();
        assert!(stored.contains(r#""idusuario":"u1""#));

        let restarted = AuthState::new(Rc::new(storage.clone()));
        restarted.load();
        assert_eq!(restarted.get_token().as_deref(), Some("jwt"));
        assert_eq!(restarted.get_user(), Some(user()));

        restarted.clear().unwrap();
        let again = AuthState::new(Rc::new(storage));
        again.load();
        assert!(!again.is_logged_in());
        assert_eq!(again.get_user(), None);
    }

    #[test]
    fn test_load_ignores_unreadable_user() {
        let storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY_TOKEN, "jwt").unwrap();
        storage.set_item(STORAGE_KEY_USER, "{no es json").unwrap();
        let state = AuthState::new(Rc::new(storage));
        state.load();
        assert!(!state.is_logged_in());
    }

    #[test]
    fn test_failed_write_keeps_session_absent() {
        let state = AuthState::new(Rc::new(ReadOnlyStorage::default()));
        assert!(state.set_auth("jwt", &user()).is_err());
        assert_eq!(state.get_token(), None);
        assert_eq!(state.get_user(), None);
    }

    #[test]
    fn test_half_written_session_is_rolled_back() {
        let storage = MemoryStorage::new();
        let flaky = FailingKeyStorage {
            inner: storage.clone(),
            failing_key: STORAGE_KEY_USER,
        };
        let state = AuthState::new(Rc::new(flaky));
        assert!(state.set_auth("jwt", &user()).is_err());
        assert!(!state.is_logged_in());
        assert_eq!(storage.get_item(STORAGE_KEY_TOKEN).unwrap(), None);
        assert!(storage.is_empty());
    }
}
