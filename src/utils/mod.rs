// Utils compartidos

pub mod storage;

pub use storage::{write_all, BrowserStorage, KeyValueStorage, MemoryStorage, StorageError};
