use std::{cell::RefCell, collections::HashMap};

use crate::error::Error;

/// Durable key-value storage the application state is mirrored to
pub trait Storage {
    fn read(&self, key: &str) -> Result<Option<String>, Error>;

    fn write(&self, key: &str, value: &str) -> Result<(), Error>;
}

impl<S: Storage + ?Sized> Storage for std::rc::Rc<S> {
    fn read(&self, key: &str) -> Result<Option<String>, Error> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Error> {
        (**self).write(key, value)
    }
}

/// In-memory storage, used where no browser is available
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Error> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
