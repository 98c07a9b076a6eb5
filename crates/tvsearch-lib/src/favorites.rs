use futures_signals::{
    signal::Signal,
    signal_vec::{MutableSignalVec, MutableVec, SignalVecExt},
};

use crate::{
    error::Error,
    models::{FavoriteEntry, Show},
    storage::Storage,
    FAVORITES_KEY,
};

/// Ordered set of favorite shows, keyed by id and mirrored to [`Storage`]
/// after every mutation.
pub struct Favorites<S> {
    storage: S,
    entries: MutableVec<FavoriteEntry>,
}

impl<S: Storage> Favorites<S> {
    /// Read the persisted collection. Missing or unreadable data starts an
    /// empty collection.
    pub fn load(storage: S) -> Self {
        let entries = match storage.read(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<FavoriteEntry>>(&raw) {
                Ok(entries) => dedup(entries),
                Err(e) => {
                    warn!("stored favorites are malformed, starting empty: {}", e);
                    vec![]
                }
            },
            Ok(None) => vec![],
            Err(e) => {
                error!("error reading favorites: {}", e);
                vec![]
            }
        };

        debug!("loaded {} favorites", entries.len());

        Self {
            storage,
            entries: MutableVec::new_with_values(entries),
        }
    }

    /// Returns `false` if a favorite with the same id already exists.
    pub fn add(&self, show: &Show) -> bool {
        let mut entries = self.entries.lock_mut();
        if entries.iter().any(|entry| entry.id == show.id) {
            debug!("show {} is already a favorite", show.id);
            return false;
        }

        let entry = FavoriteEntry::from(show);
        let mut updated = entries.to_vec();
        updated.push(entry.clone());
        self.persist(&updated);

        entries.push_cloned(entry);
        true
    }

    /// Removes every entry sharing `entry`'s id.
    pub fn remove(&self, entry: &FavoriteEntry) {
        let mut entries = self.entries.lock_mut();
        let updated: Vec<FavoriteEntry> = entries
            .iter()
            .filter(|favorite| favorite.id != entry.id)
            .cloned()
            .collect();
        self.persist(&updated);

        entries.retain(|favorite| favorite.id != entry.id);
    }

    /// Tracks whether a favorite with `id` exists.
    pub fn contains_signal(&self, id: i64) -> impl Signal<Item = bool> + use<S> {
        self.entries
            .signal_vec_cloned()
            .to_signal_map(move |entries| entries.iter().any(|entry| entry.id == id))
    }

    pub fn entries(&self) -> Vec<FavoriteEntry> {
        self.entries.lock_ref().to_vec()
    }

    pub fn len(&self) -> usize {
        self.entries.lock_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn signal_vec(&self) -> MutableSignalVec<FavoriteEntry> {
        self.entries.signal_vec_cloned()
    }

    fn persist(&self, entries: &[FavoriteEntry]) {
        let result = serde_json::to_string(entries)
            .map_err(Error::from)
            .and_then(|raw| self.storage.write(FAVORITES_KEY, &raw));

        if let Err(e) = result {
            error!("error saving favorites: {}", e);
        }
    }
}

fn dedup(entries: Vec<FavoriteEntry>) -> Vec<FavoriteEntry> {
    let mut unique: Vec<FavoriteEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        if !unique.iter().any(|existing| existing.id == entry.id) {
            unique.push(entry);
        }
    }
    unique
}

#[cfg(test)]
mod test {
    use std::rc::Rc;

    use futures::{executor::block_on, StreamExt};
    use futures_signals::signal::SignalExt;

    use super::*;
    use crate::storage::MemoryStorage;

    fn show(id: i64, name: &str) -> Show {
        Show {
            id,
            name: name.to_string(),
            rating: None,
            genres: vec![],
            summary: String::new(),
            image: None,
        }
    }

    struct FailingStorage;

    impl Storage for FailingStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, Error> {
            Err(Error::Storage("denied".to_string()))
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), Error> {
            Err(Error::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_start_empty_without_stored_entry() {
        let favorites = Favorites::load(MemoryStorage::new());
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_add_survives_reload() {
        let storage = Rc::new(MemoryStorage::new());

        let favorites = Favorites::load(storage.clone());
        assert!(favorites.add(&show(1, "Under the Dome")));

        let reloaded = Favorites::load(storage);
        assert_eq!(
            reloaded.entries(),
            vec![FavoriteEntry {
                id: 1,
                name: "Under the Dome".to_string()
            }]
        );
    }

    #[test]
    fn test_persisted_format() {
        let storage = Rc::new(MemoryStorage::new());
        let favorites = Favorites::load(storage.clone());
        favorites.add(&show(7, "Lost"));

        assert_eq!(
            storage.read(FAVORITES_KEY).unwrap().as_deref(),
            Some(r#"[{"id":7,"name":"Lost"}]"#)
        );
    }

    #[test]
    fn test_remove_after_add_leaves_empty() {
        let storage = Rc::new(MemoryStorage::new());
        let favorites = Favorites::load(storage.clone());
        favorites.add(&show(1, "Under the Dome"));

        favorites.remove(&FavoriteEntry {
            id: 1,
            name: "Under the Dome".to_string(),
        });

        assert!(favorites.is_empty());
        assert!(Favorites::load(storage).is_empty());
    }

    #[test]
    fn test_adding_same_show_twice_keeps_one_entry() {
        let favorites = Favorites::load(MemoryStorage::new());

        assert!(favorites.add(&show(1, "Under the Dome")));
        assert!(!favorites.add(&show(1, "Under the Dome")));

        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_order_is_insertion_order() {
        let favorites = Favorites::load(MemoryStorage::new());
        favorites.add(&show(3, "C"));
        favorites.add(&show(1, "A"));
        favorites.add(&show(2, "B"));

        let ids: Vec<i64> = favorites.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_stored_duplicates_are_collapsed() {
        let storage = MemoryStorage::with_item(
            FAVORITES_KEY,
            r#"[{"id":1,"name":"A"},{"id":2,"name":"B"},{"id":1,"name":"A again"}]"#,
        );
        let favorites = Favorites::load(storage);

        assert_eq!(favorites.len(), 2);
        assert_eq!(favorites.entries()[0].name, "A");
    }

    #[test]
    fn test_malformed_storage_starts_empty() {
        let storage = MemoryStorage::with_item(FAVORITES_KEY, "{not json");
        let favorites = Favorites::load(storage);
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_storage_failure_keeps_in_memory_state() {
        let favorites = Favorites::load(FailingStorage);
        assert!(favorites.is_empty());

        assert!(favorites.add(&show(1, "Under the Dome")));
        assert_eq!(favorites.entries()[0].id, 1);
    }

    #[test]
    fn test_contains_signal_follows_add_and_remove() {
        let favorites = Favorites::load(MemoryStorage::new());
        let mut added = favorites.contains_signal(1).to_stream();
        assert_eq!(block_on(added.next()), Some(false));

        favorites.add(&show(1, "Under the Dome"));
        assert_eq!(block_on(added.next()), Some(true));

        favorites.remove(&FavoriteEntry {
            id: 1,
            name: "Under the Dome".to_string(),
        });
        assert_eq!(block_on(added.next()), Some(false));
    }
}
