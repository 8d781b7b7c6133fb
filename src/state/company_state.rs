// ============================================================================
// COMPANY STATE - Empresa activa, persistida en localStorage
// ============================================================================

use crate::utils::{write_all, KeyValueStorage, StorageError};
use std::cell::RefCell;
use std::rc::Rc;

pub const STORAGE_KEY_COMPANY_ID: &str = "idEmpresa";
pub const STORAGE_KEY_COMPANY_NAME: &str = "nombreEmpresa";

/// Identidad local de la empresa (subconjunto de `Company`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyIdentity {
    pub id: String,
    pub name: String,
}

/// Estado de empresa: memoria + espejo durable
#[derive(Clone)]
pub struct CompanyState {
    storage: Rc<dyn KeyValueStorage>,
    pub identity: Rc<RefCell<Option<CompanyIdentity>>>,
}

impl CompanyState {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            identity: Rc::new(RefCell::new(None)),
        }
    }

    /// Guarda primero en storage y solo después actualiza la memoria.
    /// Si la escritura falla, ni la memoria ni el registro guardado cambian.
    pub fn set_company(&self, id: &str, name: &str) -> Result<(), StorageError> {
        let written = write_all(
            self.storage.as_ref(),
            &[(STORAGE_KEY_COMPANY_ID, id), (STORAGE_KEY_COMPANY_NAME, name)],
        );

        if let Err(e) = written {
            log::error!("❌ Error al guardar empresa: {}", e);
            return Err(e);
        }

        *self.identity.borrow_mut() = Some(CompanyIdentity {
            id: id.to_string(),
            name: name.to_string(),
        });
        log::info!("✅ Empresa guardada: {} ({})", name, id);
        Ok(())
    }

    /// Carga desde storage. Si falta algún campo la memoria queda como estaba.
    pub fn load(&self) {
        let read = |key: &str| match self.storage.get_item(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                log::warn!("⚠️ Error al cargar empresa: {}", e);
                None
            }
        };

        if let (Some(id), Some(name)) = (read(STORAGE_KEY_COMPANY_ID), read(STORAGE_KEY_COMPANY_NAME)) {
            log::info!("✅ Empresa cargada: {} ({})", name, id);
            *self.identity.borrow_mut() = Some(CompanyIdentity { id, name });
        }
    }

    /// Borra las claves durables y vuelve al estado vacío
    pub fn clear(&self) -> Result<(), StorageError> {
        let removed = self
            .storage
            .remove_item(STORAGE_KEY_COMPANY_ID)
            .and_then(|_| self.storage.remove_item(STORAGE_KEY_COMPANY_NAME));

        if let Err(e) = removed {
            log::error!("❌ Error al limpiar empresa: {}", e);
            return Err(e);
        }

        *self.identity.borrow_mut() = None;
        log::info!("🗑️ Empresa limpiada");
        Ok(())
    }

    pub fn get_identity(&self) -> Option<CompanyIdentity> {
        self.identity.borrow().clone()
    }

    pub fn company_id(&self) -> Option<String> {
        self.identity.borrow().as_ref().map(|identity| identity.id.clone())
    }
}
