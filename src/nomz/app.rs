//! # The App Controller
//!
//! [`App`] wires the engine together: it loads the store exactly once,
//! builds the renderer, and starts the router on the home fragment. After
//! boot everything is synchronous—each call to [`App::navigate`] runs one
//! navigation event to completion before the next is accepted, which is
//! what rules out partial-view races without any locking.
//!
//! Boot is the only fallible step. A failed load surfaces once as a
//! [`NomzError::DataLoad`]; there is no retry and no partial app. The host
//! renders [`crate::render::Renderer::render_load_failure`] and holds there
//! until an external reload.

use crate::error::Result;
use crate::render::Renderer;
use crate::router::{ResolvedView, Router};
use crate::store::{LoadReport, RecordStore};
use serde_json::Value;

#[derive(Debug)]
pub struct App {
    store: RecordStore,
    renderer: Renderer,
    router: Router,
    load_report: LoadReport,
}

impl App {
    /// Boots the app from a raw JSON value: load + index once, then start
    /// the router on the home view.
    pub fn boot(raw: Value) -> Result<Self> {
        Self::boot_at(raw, "")
    }

    /// Like [`App::boot`], but resolving the fragment present at startup
    /// instead of defaulting to home.
    pub fn boot_at(raw: Value, initial_fragment: &str) -> Result<Self> {
        let (store, load_report) = RecordStore::load(raw)?;
        let renderer = Renderer::new()?;
        let mut router = Router::new();
        router.start(initial_fragment, &store, &renderer);
        Ok(Self {
            store,
            renderer,
            router,
            load_report,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(json)?;
        Self::boot(raw)
    }

    /// The single navigation path. Programmatic navigation and user-driven
    /// fragment changes both come through here; there is no internal
    /// side channel.
    pub fn navigate(&mut self, fragment: &str) -> &ResolvedView {
        self.router.navigate(fragment, &self.store, &self.renderer)
    }

    pub fn current(&self) -> Option<&ResolvedView> {
        self.router.current()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }
}
