//! Browser binding: `web-sys` adapters for the controller's capabilities,
//! DOM event wiring, and the WASM entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page loads the WASM module and calls
//! `install_theme_switcher()` (optionally with a JSON config). The
//! controller is built once the document is parsed, synced from
//! `localStorage`, and then driven by the toggle's `change` event.
//!
//! TRADE-OFFS
//! ==========
//! Listeners live for the page lifetime, so their closures are leaked with
//! `forget()` instead of being stored and dropped.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlInputElement, Storage, Window};

use crate::config::{ConfigError, MarkerHost, ThemeConfig};
use crate::controller::{ThemeController, ThemeEvent};
use crate::store::{PreferenceStore, StoreError};
use crate::target::{ThemeTarget, ToggleControl};

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no {0:?} element to carry the theme class")]
    MissingHost(MarkerHost),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_message(&value))
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

// =============================================================================
// CAPABILITIES
// =============================================================================

/// `window.localStorage`. Missing storage (blocked cookies, sandboxed
/// frames) turns every call into `StoreError::Unavailable`.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(Some(storage)) => Some(storage),
            Ok(None) => {
                log::warn!("theme: localStorage not available, preference will not persist");
                None
            }
            Err(err) => {
                log::warn!("theme: localStorage access denied: {}", js_message(&err));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.get_item(key).map_err(|err| StoreError::Backend(js_message(&err)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|err| {
            log::debug!("theme: setItem({key}) threw {}", js_message(&err));
            StoreError::WriteRejected { key: key.to_owned() }
        })
    }
}

/// Class list of the marker host element.
pub struct ElementClasses {
    element: Element,
}

impl ElementClasses {
    /// Resolve the configured host on `document`.
    ///
    /// # Errors
    ///
    /// Returns `MissingHost` when the document has no body / root element.
    pub fn for_host(document: &Document, host: MarkerHost) -> Result<Self, WebError> {
        let element = match host {
            MarkerHost::Body => document.body().map(Element::from),
            MarkerHost::Root => document.document_element(),
        };
        element.map(|element| Self { element }).ok_or(WebError::MissingHost(host))
    }
}

impl ThemeTarget for ElementClasses {
    fn add_class(&mut self, class: &str) {
        if let Err(err) = self.element.class_list().add_1(class) {
            log::warn!("theme: failed to add class {class}: {}", js_message(&err));
        }
    }

    fn remove_class(&mut self, class: &str) {
        if let Err(err) = self.element.class_list().remove_1(class) {
            log::warn!("theme: failed to remove class {class}: {}", js_message(&err));
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }
}

/// `<input type="checkbox">` acting as the theme toggle.
#[derive(Clone)]
pub struct CheckboxToggle {
    input: HtmlInputElement,
}

impl CheckboxToggle {
    /// Look up the toggle by id. A missing element, or one that is not an
    /// `<input>`, yields `None`.
    #[must_use]
    pub fn find(document: &Document, id: &str) -> Option<Self> {
        let Some(element) = document.get_element_by_id(id) else {
            log::debug!("theme: no #{id} on page, toggle disabled");
            return None;
        };
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Self { input }),
            Err(element) => {
                log::warn!("theme: #{id} is a <{}>, not an input; toggle disabled", element.tag_name().to_lowercase());
                None
            }
        }
    }
}

impl ToggleControl for CheckboxToggle {
    fn is_checked(&self) -> bool {
        self.input.checked()
    }

    fn set_checked(&mut self, checked: bool) {
        self.input.set_checked(checked);
    }
}

pub type BrowserController = ThemeController<LocalStorage, ElementClasses, CheckboxToggle>;

// =============================================================================
// BINDING
// =============================================================================

/// Bind the controller to the current page. Runs immediately when the
/// document is already parsed, otherwise on `DOMContentLoaded`.
///
/// # Errors
///
/// Returns an error for an invalid config, a missing window/document, or a
/// listener that could not be registered. Errors raised after deferring to
/// `DOMContentLoaded` are logged instead.
pub fn install(config: ThemeConfig) -> Result<(), WebError> {
    config.validate()?;
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;

    if document.ready_state() != "loading" {
        bind(&window, &document, config)?;
        return Ok(());
    }

    let ready_window = window.clone();
    let ready_document = document.clone();
    let on_ready = Closure::once_into_js(move || {
        if let Err(err) = bind(&ready_window, &ready_document, config) {
            log::error!("theme: failed to bind theme switcher: {err}");
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}

fn bind(window: &Window, document: &Document, config: ThemeConfig) -> Result<(), WebError> {
    let store = LocalStorage::from_window(window);
    let target = ElementClasses::for_host(document, config.marker_host)?;
    let toggle = CheckboxToggle::find(document, &config.toggle_id);
    let input = toggle.as_ref().map(|t| t.input.clone());

    let controller: Rc<RefCell<BrowserController>> =
        Rc::new(RefCell::new(ThemeController::new(config, store, target, toggle)));
    controller.borrow_mut().handle(ThemeEvent::Ready);

    let Some(input) = input else {
        return Ok(());
    };

    let controller_for_cb = Rc::clone(&controller);
    let input_for_cb = input.clone();
    let on_change = Closure::wrap(Box::new(move |_event: Event| {
        let checked = input_for_cb.checked();
        controller_for_cb.borrow_mut().handle(ThemeEvent::ToggleChanged { checked });
    }) as Box<dyn FnMut(Event)>);
    input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}

// =============================================================================
// WASM ENTRY POINTS
// =============================================================================

/// Module start hook: panic reporting and console logging.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Host page already installed a logger.
        log::debug!("theme: keeping existing logger");
    }
}

/// Install the theme switcher. `config_json` overrides any of
/// `storage_key`, `toggle_id`, `dark_class`, `marker_host`.
///
/// # Errors
///
/// Rejects with a message string on invalid config or a missing document.
#[wasm_bindgen(js_name = installThemeSwitcher)]
pub fn install_theme_switcher(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json.as_deref() {
        Some(raw) => ThemeConfig::from_json(raw).map_err(WebError::from)?,
        None => ThemeConfig::default(),
    };
    install(config)?;
    Ok(())
}
