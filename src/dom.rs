//! Browser binding: `localStorage`, `matchMedia`, and the toggle element.
//!
//! Compiled only with the `hydrate` feature. Missing elements are skipped
//! with a debug log; the root attribute is always applied.

use std::cell::RefCell;
use std::rc::Rc;

use theme::{Mode, ThemeView};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MediaQueryList, MediaQueryListEvent, Storage, Window};

use crate::config::SiteConfig;
use crate::session::ThemeSession;
use crate::store::{MemoryStore, PreferenceStore, StoreError};

/// Install the panic hook and console logger.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("theme: console logger not installed: {err}");
    }
}

// =============================================================
// Storage
// =============================================================

/// `localStorage` under a single key.
pub struct LocalStorageStore {
    storage: Storage,
    key: String,
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(&self.key)
            .map_err(|err| StoreError::Read(format!("{err:?}")))
    }

    fn save(&mut self, mode: Mode) -> Result<(), StoreError> {
        self.storage
            .set_item(&self.key, mode.as_str())
            .map_err(|err| StoreError::Write(format!("{err:?}")))
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.storage
            .remove_item(&self.key)
            .map_err(|err| StoreError::Write(format!("{err:?}")))
    }
}

/// `localStorage` when the browser grants it, memory otherwise.
pub enum BrowserStore {
    Local(LocalStorageStore),
    Memory(MemoryStore),
}

impl BrowserStore {
    fn open(window: &Window, key: &str) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => Self::Local(LocalStorageStore { storage, key: key.to_owned() }),
            Ok(None) => {
                log::warn!("theme: {}; choices last for this visit only", StoreError::Unavailable);
                Self::Memory(MemoryStore::new())
            }
            Err(err) => {
                log::warn!("theme: localStorage denied ({err:?}); choices last for this visit only");
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match self {
            Self::Local(store) => store.load(),
            Self::Memory(store) => store.load(),
        }
    }

    fn save(&mut self, mode: Mode) -> Result<(), StoreError> {
        match self {
            Self::Local(store) => store.save(mode),
            Self::Memory(store) => store.save(mode),
        }
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match self {
            Self::Local(store) => store.clear(),
            Self::Memory(store) => store.clear(),
        }
    }
}

// =============================================================
// Rendering
// =============================================================

struct ThemeDom {
    root: Element,
    toggle: Option<Element>,
    indicator: Option<Element>,
    config: SiteConfig,
}

impl ThemeDom {
    fn apply(&self, view: &ThemeView<'_>) {
        let attribute = &self.config.theme_attribute;
        report(
            attribute,
            match view.attribute {
                Some(mode) => self.root.set_attribute(attribute, mode.as_str()),
                None => self.root.remove_attribute(attribute),
            },
        );

        if let Some(toggle) = &self.toggle {
            match toggle.query_selector("i") {
                Ok(Some(icon)) => icon.set_class_name(view.icon_class),
                Ok(None) => log::debug!("theme: toggle has no icon element"),
                Err(err) => log::debug!("theme: icon lookup failed: {err:?}"),
            }
            report("aria-label", toggle.set_attribute("aria-label", view.aria_label));
            report("title", toggle.set_attribute("title", view.title));
        }

        if let Some(indicator) = &self.indicator {
            let classes = indicator.class_list();
            report(
                &self.config.indicator_class,
                classes
                    .toggle_with_force(&self.config.indicator_class, view.following_system)
                    .map(|_| ()),
            );
        }
    }
}

fn report(what: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::debug!("theme: failed to update {what}: {err:?}");
    }
}

struct Shared {
    session: RefCell<ThemeSession<BrowserStore>>,
    dom: ThemeDom,
}

impl Shared {
    fn render(&self) {
        let session = self.session.borrow();
        self.dom.apply(&session.view(&self.dom.config.labels));
    }

    fn toggle(&self) {
        self.session.borrow_mut().toggle();
        self.render();
    }

    fn reset(&self) {
        self.session.borrow_mut().reset_to_system();
        self.render();
    }

    fn system_changed(&self, dark: bool) {
        let applied = self.session.borrow_mut().on_system_change(dark);
        if applied.is_some() {
            self.render();
        }
    }
}

// =============================================================
// JS entry point
// =============================================================

/// Owns the theme session and its DOM listeners.
///
/// ```javascript
/// const theme = ThemeManager.mount(JSON.stringify({ storage_key: "theme" }));
/// theme.is_dark();
/// ```
///
/// Dropping (`free()`) detaches every listener.
#[wasm_bindgen]
pub struct ThemeManager {
    shared: Rc<Shared>,
    media: Option<MediaQueryList>,
    on_click: Closure<dyn FnMut()>,
    on_dblclick: Closure<dyn FnMut()>,
    on_change: Closure<dyn FnMut(MediaQueryListEvent)>,
}

#[wasm_bindgen]
impl ThemeManager {
    /// Read storage and the system signal, render, and subscribe to events.
    ///
    /// # Errors
    ///
    /// Returns a JS string error for an invalid config or a page without a
    /// window/document.
    pub fn mount(config_json: Option<String>) -> Result<ThemeManager, JsValue> {
        let config = match config_json.as_deref() {
            Some(raw) => SiteConfig::from_json(raw),
            None => Ok(SiteConfig::default()),
        }
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
        if let Ok(level) = config.level_filter() {
            log::set_max_level(level);
        }

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
        let root = document
            .document_element()
            .ok_or_else(|| JsValue::from_str("no document element"))?;

        let toggle = document.get_element_by_id(&config.toggle_id);
        if toggle.is_none() {
            log::debug!("theme: no #{} element", config.toggle_id);
        }
        let indicator = document.get_element_by_id(&config.indicator_id);
        if indicator.is_none() {
            log::debug!("theme: no #{} element", config.indicator_id);
        }

        let media = match window.match_media(&config.color_scheme_query) {
            Ok(media) => media,
            Err(err) => {
                log::warn!("theme: matchMedia failed: {err:?}");
                None
            }
        };
        let system_dark = media.as_ref().is_some_and(MediaQueryList::matches);

        let store = BrowserStore::open(&window, &config.storage_key);
        let shared = Rc::new(Shared {
            session: RefCell::new(ThemeSession::start(store, system_dark)),
            dom: ThemeDom { root, toggle, indicator, config },
        });
        shared.render();

        let on_click = {
            let shared = Rc::clone(&shared);
            Closure::<dyn FnMut()>::new(move || shared.toggle())
        };
        let on_dblclick = {
            let shared = Rc::clone(&shared);
            Closure::<dyn FnMut()>::new(move || shared.reset())
        };
        let on_change = {
            let shared = Rc::clone(&shared);
            Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
                shared.system_changed(event.matches());
            })
        };

        if let Some(toggle) = &shared.dom.toggle {
            report("click listener", toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()));
            report(
                "dblclick listener",
                toggle.add_event_listener_with_callback("dblclick", on_dblclick.as_ref().unchecked_ref()),
            );
        }
        if let Some(media) = &media {
            report("change listener", media.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref()));
        }

        Ok(Self { shared, media, on_click, on_dblclick, on_change })
    }

    /// Same as clicking the toggle.
    pub fn toggle(&self) {
        self.shared.toggle();
    }

    /// Same as double-clicking the toggle.
    pub fn reset(&self) {
        self.shared.reset();
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.shared.session.borrow().effective_mode().is_dark()
    }

    #[must_use]
    pub fn is_following_system(&self) -> bool {
        self.shared.session.borrow().is_following_system()
    }
}

impl Drop for ThemeManager {
    fn drop(&mut self) {
        if let Some(toggle) = &self.shared.dom.toggle {
            report(
                "click listener",
                toggle.remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref()),
            );
            report(
                "dblclick listener",
                toggle.remove_event_listener_with_callback("dblclick", self.on_dblclick.as_ref().unchecked_ref()),
            );
        }
        if let Some(media) = &self.media {
            report(
                "change listener",
                media.remove_event_listener_with_callback("change", self.on_change.as_ref().unchecked_ref()),
            );
        }
    }
}
