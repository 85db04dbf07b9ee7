use thiserror::Error;

use crate::i18n::Locale;

mod json_file;
mod memory;

pub use self::json_file::JsonFileStore;
pub use self::memory::MemoryStore;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A small string to string store, in the shape of browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

pub const ACCESS_KEY: &str = "pokerAccess";
pub const ACCESS_GRANTED: &str = "granted";
pub const LOCALE_KEY: &str = "poker-locale";

/// Typed view over the two persisted preferences.
#[derive(Debug)]
pub struct Preferences<'a, S: KeyValueStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore + ?Sized> Preferences<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// True only when the access flag holds exactly `granted`.
    pub fn access_granted(&self) -> Result<bool, StorageError> {
        Ok(self.store.get(ACCESS_KEY)?.as_deref() == Some(ACCESS_GRANTED))
    }

    pub fn grant_access(&mut self) -> Result<(), StorageError> {
        self.store.set(ACCESS_KEY, ACCESS_GRANTED)
    }

    pub fn revoke_access(&mut self) -> Result<(), StorageError> {
        self.store.remove(ACCESS_KEY)
    }

    /// The stored locale code, if any. The value is not validated here.
    pub fn stored_locale(&self) -> Result<Option<String>, StorageError> {
        self.store.get(LOCALE_KEY)
    }

    pub fn set_locale(&mut self, locale: Locale) -> Result<(), StorageError> {
        self.store.set(LOCALE_KEY, locale.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_flag() {
        let mut store = MemoryStore::new();
        let mut prefs = Preferences::new(&mut store);
        assert!(!prefs.access_granted().unwrap());

        prefs.grant_access().unwrap();
        assert!(prefs.access_granted().unwrap());

        prefs.revoke_access().unwrap();
        assert!(!prefs.access_granted().unwrap());
    }

    #[test]
    fn test_other_access_values_not_granted() {
        let mut store = MemoryStore::new();
        store.set(ACCESS_KEY, "yes").unwrap();
        let prefs = Preferences::new(&mut store);
        assert!(!prefs.access_granted().unwrap());
    }

    #[test]
    fn test_locale() {
        let mut store = MemoryStore::new();
        let mut prefs = Preferences::new(&mut store);
        assert_eq!(prefs.stored_locale().unwrap(), None);

        prefs.set_locale(Locale::PtBr).unwrap();
        assert_eq!(prefs.stored_locale().unwrap().as_deref(), Some("pt-BR"));
        assert_eq!(store.get(LOCALE_KEY).unwrap().as_deref(), Some("pt-BR"));
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        Preferences::new(&mut store).grant_access().unwrap();
        assert_eq!(store.get(ACCESS_KEY).unwrap().as_deref(), Some(ACCESS_GRANTED));
    }
}
