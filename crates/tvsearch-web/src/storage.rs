use tvsearch_lib::prelude::{Error, Storage};

/// Browser `localStorage`, or nothing when the browser refuses access
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let inner = match crate::utils::local_storage() {
            Ok(storage) => Some(storage),
            Err(e) => {
                error!("local storage unavailable, favorites will not persist: {}", e);
                None
            }
        };

        Self { inner }
    }

    fn storage(&self) -> Result<&web_sys::Storage, Error> {
        self.inner
            .as_ref()
            .ok_or_else(|| Error::Storage("local storage unavailable".to_string()))
    }
}

impl Storage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, Error> {
        self.storage()?
            .get_item(key)
            .map_err(|e| Error::Storage(format!("error reading {}: {:?}", key, e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Error> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("error writing {}: {:?}", key, e)))
    }
}
