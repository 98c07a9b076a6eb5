use futures_signals::{signal::Mutable, signal_vec::MutableVec};

use crate::{
    contracts::SearchApi,
    favorites::Favorites,
    models::{FavoriteEntry, Person, Show},
    selection::Selection,
    storage::Storage,
};

/// Application state: the query, the latest results, favorites and the
/// detail modal.
pub struct SearchApp<A, S> {
    api: A,
    pub query: Mutable<String>,
    pub shows: MutableVec<Show>,
    pub people: MutableVec<Person>,
    pub favorites: Favorites<S>,
    pub selection: Mutable<Selection>,
}

impl<A, S> SearchApp<A, S>
where
    A: SearchApi,
    S: Storage,
{
    pub fn new(api: A, storage: S) -> Self {
        Self {
            api,
            query: Mutable::new(String::new()),
            shows: MutableVec::new(),
            people: MutableVec::new(),
            favorites: Favorites::load(storage),
            selection: Mutable::new(Selection::Closed),
        }
    }

    /// Search shows, then people, for the current query. Each list is only
    /// replaced by a successful, non-empty response.
    pub async fn search(&self) {
        let query = self.query.get_cloned();
        info!("searching for {:?}", query);

        self.search_shows(&query).await;
        self.search_people(&query).await;
    }

    async fn search_shows(&self, query: &str) {
        match self.api.search_shows(query).await {
            Ok(items) if items.is_empty() => {
                info!("no shows found for {:?}", query);
            }
            Ok(items) => {
                let shows: Vec<Show> = items.into_iter().map(|item| item.show.into()).collect();
                debug!("found {} shows", shows.len());
                self.shows.lock_mut().replace_cloned(shows);
            }
            Err(e) => {
                error!("error searching shows: {}", e);
            }
        }
    }

    async fn search_people(&self, query: &str) {
        match self.api.search_people(query).await {
            Ok(items) if items.is_empty() => {
                info!("no people found for {:?}", query);
            }
            Ok(items) => {
                let people: Vec<Person> =
                    items.into_iter().map(|item| item.person.into()).collect();
                debug!("found {} people", people.len());
                self.people.lock_mut().replace_cloned(people);
            }
            Err(e) => {
                error!("error searching people: {}", e);
            }
        }
    }

    pub fn add_favorite(&self, show: &Show) -> bool {
        self.favorites.add(show)
    }

    pub fn remove_favorite(&self, entry: &FavoriteEntry) {
        self.favorites.remove(entry)
    }

    /// Open the detail of the loaded show matching the favorite's id.
    pub fn open_favorite(&self, entry: &FavoriteEntry) {
        let show = self
            .shows
            .lock_ref()
            .iter()
            .find(|show| show.id == entry.id)
            .cloned();
        match show {
            Some(show) => self.open_show(show),
            None => warn!("favorite {} is not among the current show results", entry.id),
        }
    }

    pub fn open_show(&self, show: Show) {
        self.selection.set(Selection::Show(show));
    }

    pub fn open_person(&self, person: Person) {
        self.selection.set(Selection::Person(person));
    }

    pub fn close(&self) {
        self.selection.set_neq(Selection::Closed);
    }

    pub fn shows(&self) -> Vec<Show> {
        self.shows.lock_ref().to_vec()
    }

    pub fn people(&self) -> Vec<Person> {
        self.people.lock_ref().to_vec()
    }
}
