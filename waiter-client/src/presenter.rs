//! List presenter - turns catalog entries into clickable rows
//!
//! Each row captures the entry it was rendered from, so activation delivers
//! that value even if the catalog has been replaced since.

use std::fmt;
use std::sync::Arc;

use shared::{MenuEntry, format_price};

use crate::catalog::CatalogStore;
use crate::image::{ImageLoader, Thumbnail};

/// Callback invoked with the activated entry
pub type ActivationHandler = Arc<dyn Fn(MenuEntry) + Send + Sync>;

/// Rendered representation of one menu entry
#[derive(Clone)]
pub struct RenderedRow {
    entry: MenuEntry,
    title: String,
    price_label: String,
    thumbnail: Thumbnail,
    on_activate: ActivationHandler,
}

impl RenderedRow {
    pub fn entry(&self) -> &MenuEntry {
        &self.entry
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Price as shown, e.g. "₱120.50"
    pub fn price_label(&self) -> &str {
        &self.price_label
    }

    pub fn thumbnail(&self) -> &Thumbnail {
        &self.thumbnail
    }

    /// User tapped this row
    pub fn activate(&self) {
        (self.on_activate)(self.entry.clone());
    }
}

impl fmt::Debug for RenderedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderedRow")
            .field("entry", &self.entry)
            .field("title", &self.title)
            .field("price_label", &self.price_label)
            .finish_non_exhaustive()
    }
}

/// Binds catalog entries to rows
pub struct ListPresenter {
    rows: Vec<RenderedRow>,
    source: Arc<[MenuEntry]>,
    currency_symbol: String,
    images: Arc<dyn ImageLoader>,
    on_activate: ActivationHandler,
}

impl ListPresenter {
    pub fn new(
        currency_symbol: impl Into<String>,
        images: Arc<dyn ImageLoader>,
        on_activate: ActivationHandler,
    ) -> Self {
        Self {
            rows: Vec::new(),
            source: Arc::from(Vec::<MenuEntry>::new()),
            currency_symbol: currency_symbol.into(),
            images,
            on_activate,
        }
    }

    /// Build the row for one entry and request its thumbnail
    pub fn row_for(&self, entry: &MenuEntry) -> RenderedRow {
        let thumbnail = Thumbnail::new();
        if entry.has_image() {
            self.images.load_into(entry.image_url(), &thumbnail);
        }

        RenderedRow {
            entry: entry.clone(),
            title: entry.name().to_string(),
            price_label: format_price(entry.price(), &self.currency_symbol),
            thumbnail,
            on_activate: Arc::clone(&self.on_activate),
        }
    }

    /// Re-derive every row from the store's current catalog
    pub fn refresh(&mut self, store: &CatalogStore) {
        let source = store.snapshot();
        self.rows = source.iter().map(|entry| self.row_for(entry)).collect();
        self.source = source;
    }

    pub fn rows(&self) -> &[RenderedRow] {
        &self.rows
    }

    pub fn row(&self, position: usize) -> Option<&RenderedRow> {
        self.rows.get(position)
    }

    /// Catalog snapshot the rows were derived from
    pub fn source(&self) -> &Arc<[MenuEntry]> {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::parse_menu_response;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLoader {
        urls: Mutex<Vec<String>>,
    }

    impl ImageLoader for RecordingLoader {
        fn load_into(&self, url: &str, _surface: &Thumbnail) {
            self.urls.lock().unwrap().push(url.to_string());
        }
    }

    fn store(body: &str) -> CatalogStore {
        let mut store = CatalogStore::new();
        store.replace(parse_menu_response(body).unwrap());
        store
    }

    fn recording_handler() -> (ActivationHandler, Arc<Mutex<Vec<MenuEntry>>>) {
        let activated = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&activated);
        let handler: ActivationHandler = Arc::new(move |entry| sink.lock().unwrap().push(entry));
        (handler, activated)
    }

    #[test]
    fn test_row_shows_name_and_price() {
        let (handler, _) = recording_handler();
        let loader = Arc::new(RecordingLoader::default());
        let mut presenter = ListPresenter::new("₱", loader.clone(), handler);

        presenter.refresh(&store(
            r#"{"menus":[{"id":1,"name":"Adobo","price":120.5,"image_url":""},
                         {"id":2,"name":"Lumpia","price":45,"image_url":"http://img/2.png"}]}"#,
        ));

        let rows = presenter.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title(), "Adobo");
        assert_eq!(rows[0].price_label(), "₱120.50");
        assert_eq!(rows[1].price_label(), "₱45.00");
        assert!(!rows[0].thumbnail().is_loaded());
        // Only entries with an image request one
        assert_eq!(*loader.urls.lock().unwrap(), vec!["http://img/2.png".to_string()]);
    }

    #[test]
    fn test_rows_share_store_snapshot() {
        let (handler, _) = recording_handler();
        let mut presenter =
            ListPresenter::new("₱", Arc::new(crate::image::NoopImageLoader), handler);
        let store = store(r#"{"menus":[{"id":1,"name":"Adobo","price":1}]}"#);

        presenter.refresh(&store);
        assert!(Arc::ptr_eq(presenter.source(), &store.snapshot()));
        assert_eq!(presenter.rows().len(), store.size());
    }

    #[test]
    fn test_activation_delivers_rendered_entry_after_replace() {
        let (handler, activated) = recording_handler();
        let mut presenter =
            ListPresenter::new("₱", Arc::new(crate::image::NoopImageLoader), handler);
        let mut store = store(r#"{"menus":[{"id":1,"name":"Adobo","price":1}]}"#);
        presenter.refresh(&store);

        let shown = presenter.row(0).cloned().unwrap();
        store.replace(
            parse_menu_response(r#"{"menus":[{"id":7,"name":"Sisig","price":2}]}"#).unwrap(),
        );
        presenter.refresh(&store);

        shown.activate();
        let activated = activated.lock().unwrap();
        assert_eq!(activated.len(), 1);
        assert_eq!(activated[0].id(), 1);
        assert_eq!(activated[0].name(), "Adobo");
    }
}
