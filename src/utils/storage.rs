// ============================================================================
// STORAGE - Almacenamiento clave/valor durable (localStorage en el navegador)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;
use web_sys::{window, Storage};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("No se pudo acceder a localStorage")]
    Unavailable,
    #[error("Error leyendo '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("Error guardando '{key}': {reason}")]
    Write { key: String, reason: String },
    #[error("Error eliminando '{key}': {reason}")]
    Remove { key: String, reason: String },
}

/// Almacenamiento de strings por clave. Los stores lo reciben por constructor.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?.remove_item(key).map_err(|e| StorageError::Remove {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// Almacenamiento en memoria. Los clones comparten el mismo mapa, así que
/// un store nuevo sobre un clon simula un reinicio del proceso.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Escribe varias claves como un solo registro. Si una escritura falla,
/// las claves ya escritas vuelven a su valor anterior (o se eliminan).
pub fn write_all(storage: &dyn KeyValueStorage, entries: &[(&str, &str)]) -> Result<(), StorageError> {
    let mut previous: Vec<(&str, Option<String>)> = Vec::with_capacity(entries.len());

    for &(key, value) in entries {
        let before = storage.get_item(key).unwrap_or(None);
        if let Err(e) = storage.set_item(key, value) {
            rollback(storage, &previous);
            return Err(e);
        }
        previous.push((key, before));
    }
    Ok(())
}

fn rollback(storage: &dyn KeyValueStorage, previous: &[(&str, Option<String>)]) {
    for (key, before) in previous.iter().rev() {
        let restored = match before {
            Some(value) => storage.set_item(key, value),
            None => storage.remove_item(key),
        };
        if let Err(e) = restored {
            log::error!("❌ No se pudo restaurar '{}': {}", key, e);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_clones_share_items() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set_item("idEmpresa", "emp-1").unwrap();
        assert_eq!(other.get_item("idEmpresa").unwrap().as_deref(), Some("emp-1"));
        other.remove_item("idEmpresa").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_write_all_restores_previous_values_on_failure() {
        let memory = MemoryStorage::new();
        memory.set_item("a", "viejo").unwrap();
        let storage = testing::FailingKeyStorage {
            inner: memory.clone(),
            failing_key: "c",
        };

        let error = write_all(&storage, &[("a", "nuevo"), ("b", "nuevo"), ("c", "nuevo")]).unwrap_err();
        assert!(matches!(error, StorageError::Write { ref key, .. } if key == "c"));
        assert_eq!(memory.get_item("a").unwrap().as_deref(), Some("viejo"));
        assert_eq!(memory.get_item("b").unwrap(), None);
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn test_write_all_writes_every_entry() {
        let memory = MemoryStorage::new();
        write_all(&memory, &[("a", "1"), ("b", "2")]).unwrap();
        assert_eq!(memory.get_item("b").unwrap().as_deref(), Some("2"));
        assert_eq!(memory.len(), 2);
    }
}
