use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::anyhow;
use futures::{
    future::{abortable, AbortHandle},
    Future,
};
use futures_signals::signal::{Mutable, Signal};
use tvsearch_tvmaze::config::TVMAZE_API;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Storage, Window};

thread_local! {
    static WINDOW: Window = web_sys::window().unwrap_throw();
    static API_HOST: RefCell<String> = RefCell::new(TVMAZE_API.to_string());
}

/// Runs one future at a time; starting a load aborts the one in flight so
/// a slow earlier response can not overwrite a later one.
pub struct AsyncLoader {
    generation: Rc<Cell<usize>>,
    handle: RefCell<Option<AbortHandle>>,
    loading: Mutable<bool>,
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            generation: Rc::new(Cell::new(0)),
            handle: RefCell::new(None),
            loading: Mutable::new(false),
        }
    }

    pub fn load<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let (fut, handle) = abortable(fut);
        if let Some(previous) = self.handle.replace(Some(handle)) {
            previous.abort();
        }

        let id = self.generation.get().wrapping_add(1);
        self.generation.set(id);
        self.loading.set_neq(true);

        let generation = self.generation.clone();
        let loading = self.loading.clone();

        spawn_local(async move {
            if fut.await.is_err() {
                debug!("load {} aborted", id);
            }

            if generation.get() == id {
                loading.set_neq(false);
            }
        });
    }

    pub fn is_loading(&self) -> impl Signal<Item = bool> + use<> {
        self.loading.signal()
    }
}

/// Use `window.__TVSEARCH_API__` as the API host when the page defines it.
pub fn initialize_api_host() {
    match js_sys::eval("window.__TVSEARCH_API__") {
        Ok(val) => {
            if let Some(host) = val.as_string() {
                info!("using api host {}", host);
                API_HOST.with(|s| *s.borrow_mut() = host);
            }
        }
        Err(e) => {
            warn!("error reading api host override: {:?}", e);
        }
    }
}

pub fn api_host() -> String {
    API_HOST.with(|v| v.borrow().clone())
}

pub fn window() -> Window {
    WINDOW.with(|s| s.clone())
}

pub fn local_storage() -> Result<Storage, anyhow::Error> {
    window()
        .local_storage()
        .map_err(|e| anyhow!("error access local storage: {:?}", e))?
        .ok_or_else(|| anyhow!("no local storage"))
}
