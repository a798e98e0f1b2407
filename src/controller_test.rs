use super::*;
use crate::config::ThemeConfig;
use crate::store::MemoryStore;
use crate::target::{MemoryTarget, MemoryToggle};

type Controller = ThemeController<MemoryStore, MemoryTarget, MemoryToggle>;

// =============================================================
// Helpers
// =============================================================

fn controller(store: MemoryStore, toggle: Option<MemoryToggle>) -> Controller {
    ThemeController::new(ThemeConfig::default(), store, MemoryTarget::new(), toggle)
}

fn stored(c: &Controller) -> Option<String> {
    c.store().get("theme").unwrap()
}

fn marker(c: &Controller) -> bool {
    c.target().has_class("dark-theme")
}

fn checked(c: &Controller) -> Option<bool> {
    c.toggle().map(ToggleControl::is_checked)
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_dark_token_applies_marker_and_checks_toggle() {
    let mut c = controller(MemoryStore::with_entry("theme", "dark-theme"), Some(MemoryToggle::new(false)));
    assert_eq!(c.initialize(), Preference::Dark);
    assert!(marker(&c));
    assert_eq!(checked(&c), Some(true));
}

#[test]
fn initialize_without_toggle_still_applies_marker() {
    let mut c = controller(MemoryStore::with_entry("theme", "dark-theme"), None);
    assert_eq!(c.initialize(), Preference::Dark);
    assert!(marker(&c));
    assert!(!c.has_toggle());
}

#[test]
fn initialize_absent_value_removes_marker_and_writes_nothing() {
    let mut c = ThemeController::new(
        ThemeConfig::default(),
        MemoryStore::new(),
        MemoryTarget::with_classes(&["dark-theme"]),
        Some(MemoryToggle::new(false)),
    );
    assert_eq!(c.initialize(), Preference::Light);
    assert!(!marker(&c));
    assert!(c.store().is_empty());
    assert_eq!(checked(&c), Some(false));
}

#[test]
fn initialize_light_token_leaves_marker_absent() {
    let mut c = controller(MemoryStore::with_entry("theme", "light-theme"), Some(MemoryToggle::new(false)));
    assert_eq!(c.initialize(), Preference::Light);
    assert!(!marker(&c));
    assert_eq!(checked(&c), Some(false));
    assert_eq!(stored(&c).as_deref(), Some("light-theme"));
}

#[test]
fn initialize_light_token_never_applies_light_class() {
    let mut c = controller(MemoryStore::with_entry("theme", "light-theme"), None);
    c.initialize();
    assert_eq!(c.target().classes().count(), 0);
}

#[test]
fn initialize_unrecognized_value_is_light_and_untouched() {
    for raw in ["Dark-Theme", "dark", "", "blue-theme"] {
        let mut c = controller(MemoryStore::with_entry("theme", raw), Some(MemoryToggle::new(false)));
        assert_eq!(c.initialize(), Preference::Light, "value {raw:?}");
        assert!(!marker(&c), "value {raw:?}");
        assert_eq!(c.target().classes().count(), 0, "value {raw:?}");
        assert_eq!(stored(&c).as_deref(), Some(raw));
    }
}

#[test]
fn initialize_light_token_does_not_uncheck_toggle() {
    let mut c = controller(MemoryStore::with_entry("theme", "light-theme"), Some(MemoryToggle::new(true)));
    c.initialize();
    assert_eq!(checked(&c), Some(true));
}

#[test]
fn initialize_is_idempotent() {
    for seed in [Some("dark-theme"), Some("light-theme"), Some("junk"), None] {
        let store = seed.map_or_else(MemoryStore::new, |v| MemoryStore::with_entry("theme", v));
        let mut c = controller(store, Some(MemoryToggle::new(false)));
        let first = c.initialize();
        let after_first = (marker(&c), checked(&c), stored(&c));
        let second = c.initialize();
        assert_eq!(first, second);
        assert_eq!((marker(&c), checked(&c), stored(&c)), after_first);
    }
}

#[test]
fn initialize_read_failure_counts_as_absent() {
    struct BrokenStore;
    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, crate::store::StoreError> {
            Err(crate::store::StoreError::Unavailable)
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), crate::store::StoreError> {
            Err(crate::store::StoreError::Unavailable)
        }
    }

    let mut c: ThemeController<BrokenStore, MemoryTarget, MemoryToggle> = ThemeController::new(
        ThemeConfig::default(),
        BrokenStore,
        MemoryTarget::with_classes(&["dark-theme"]),
        None,
    );
    assert_eq!(c.initialize(), Preference::Light);
    assert!(!c.target().has_class("dark-theme"));
}

// =============================================================
// handle_change
// =============================================================

#[test]
fn change_to_checked_applies_marker_and_stores_dark() {
    let mut c = controller(MemoryStore::new(), Some(MemoryToggle::new(false)));
    c.initialize();
    assert_eq!(c.handle_change(true), Preference::Dark);
    assert!(marker(&c));
    assert_eq!(stored(&c).as_deref(), Some("dark-theme"));
    assert_eq!(checked(&c), Some(true));
}

#[test]
fn change_to_unchecked_removes_marker_and_stores_light() {
    let mut c = controller(MemoryStore::with_entry("theme", "dark-theme"), Some(MemoryToggle::new(false)));
    c.initialize();
    assert_eq!(c.handle_change(false), Preference::Light);
    assert!(!marker(&c));
    assert_eq!(stored(&c).as_deref(), Some("light-theme"));
    assert_eq!(checked(&c), Some(false));
}

#[test]
fn repeated_change_to_same_state_is_stable() {
    let mut c = controller(MemoryStore::new(), Some(MemoryToggle::new(true)));
    c.handle_change(true);
    c.handle_change(true);
    assert!(marker(&c));
    assert_eq!(stored(&c).as_deref(), Some("dark-theme"));
    assert_eq!(c.state(), Preference::Dark);
}

#[test]
fn change_keeps_unrelated_classes() {
    let mut c = ThemeController::new(
        ThemeConfig::default(),
        MemoryStore::new(),
        MemoryTarget::with_classes(&["layout"]),
        Some(MemoryToggle::new(false)),
    );
    c.handle_change(true);
    c.handle_change(false);
    assert_eq!(c.target().classes().collect::<Vec<_>>(), vec!["layout"]);
}

#[test]
fn change_with_rejected_write_still_updates_marker() {
    let mut c = controller(MemoryStore::new().rejecting_writes(), Some(MemoryToggle::new(false)));
    assert_eq!(c.handle_change(true), Preference::Dark);
    assert!(marker(&c));
    assert_eq!(stored(&c), None);
}

// =============================================================
// handle (event dispatch)
// =============================================================

#[test]
fn handle_ready_runs_initialize() {
    let mut c = controller(MemoryStore::with_entry("theme", "dark-theme"), Some(MemoryToggle::new(false)));
    assert_eq!(c.handle(ThemeEvent::Ready), Preference::Dark);
    assert!(marker(&c));
}

#[test]
fn handle_toggle_changed_routes_to_change() {
    let mut c = controller(MemoryStore::new(), Some(MemoryToggle::new(false)));
    c.handle(ThemeEvent::Ready);
    assert_eq!(c.handle(ThemeEvent::ToggleChanged { checked: true }), Preference::Dark);
    assert_eq!(c.handle(ThemeEvent::ToggleChanged { checked: false }), Preference::Light);
    assert_eq!(stored(&c).as_deref(), Some("light-theme"));
}

#[test]
fn handle_toggle_changed_without_toggle_is_ignored() {
    let mut c = controller(MemoryStore::new(), None);
    c.handle(ThemeEvent::Ready);
    assert_eq!(c.handle(ThemeEvent::ToggleChanged { checked: true }), Preference::Light);
    assert!(!marker(&c));
    assert!(c.store().is_empty());
}

// =============================================================
// Config
// =============================================================

#[test]
fn custom_key_and_class_are_used() {
    let config = ThemeConfig {
        storage_key: "site.theme".into(),
        dark_class: "is-dark".into(),
        ..ThemeConfig::default()
    };
    let mut c: Controller = ThemeController::new(
        config,
        MemoryStore::with_entry("theme", "dark-theme"),
        MemoryTarget::new(),
        Some(MemoryToggle::new(false)),
    );
    assert_eq!(c.initialize(), Preference::Light);
    c.handle_change(true);
    assert!(c.target().has_class("is-dark"));
    assert!(!c.target().has_class("dark-theme"));
    assert_eq!(c.store().get("site.theme").unwrap().as_deref(), Some("dark-theme"));
    assert_eq!(c.store().get("theme").unwrap().as_deref(), Some("dark-theme"));
}
