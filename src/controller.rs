//! Theme preference controller.
//!
//! Keeps three things in agreement: the token in the preference store, the
//! dark marker class on the marker host, and the toggle's checked flag.
//!
//! DESIGN
//! ======
//! The controller owns its capabilities (`PreferenceStore`, `ThemeTarget`,
//! optional `ToggleControl`) and is driven by `ThemeEvent`s. It holds no
//! browser types, so the same code runs under `web` and in plain unit tests.
//!
//! Initialization never writes the store. A light token only ever appears
//! after the user unchecks the toggle; a page with no stored value keeps
//! having none until then.
//!
//! A stored value that is present but not the dark token leaves the marker
//! alone (the host markup decides), while an absent value actively removes
//! it.

use crate::config::ThemeConfig;
use crate::preference::Preference;
use crate::store::PreferenceStore;
use crate::target::{ThemeTarget, ToggleControl};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Events the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeEvent {
    /// Page finished parsing; read the stored preference once.
    Ready,
    /// The toggle's checked state changed to `checked`.
    ToggleChanged { checked: bool },
}

pub struct ThemeController<S, T, C> {
    config: ThemeConfig,
    store: S,
    target: T,
    toggle: Option<C>,
    state: Preference,
}

impl<S, T, C> ThemeController<S, T, C>
where
    S: PreferenceStore,
    T: ThemeTarget,
    C: ToggleControl,
{
    /// Build a controller. `toggle` is `None` when the page has no toggle;
    /// the marker is still synced from storage in that case.
    pub fn new(config: ThemeConfig, store: S, target: T, toggle: Option<C>) -> Self {
        Self { config, store, target, toggle, state: Preference::Light }
    }

    /// Route an event to its handler and return the resulting state.
    pub fn handle(&mut self, event: ThemeEvent) -> Preference {
        match event {
            ThemeEvent::Ready => self.initialize(),
            ThemeEvent::ToggleChanged { checked } => {
                if self.toggle.is_none() {
                    log::debug!("theme: change event without a toggle, ignoring");
                    return self.state;
                }
                self.handle_change(checked)
            }
        }
    }

    /// Apply the stored preference to the marker host and toggle.
    pub fn initialize(&mut self) -> Preference {
        let class = self.config.dark_class.as_str();

        match self.read_stored() {
            Some(token) => match Preference::from_token(&token) {
                Some(Preference::Dark) => {
                    self.target.add_class(class);
                    match self.toggle.as_mut() {
                        Some(toggle) => toggle.set_checked(true),
                        None => log::debug!("theme: no toggle on page, skipping checked sync"),
                    }
                    self.state = Preference::Dark;
                }
                Some(Preference::Light) => self.state = Preference::Light,
                None => {
                    log::debug!("theme: unrecognized stored value {token:?}, treating as light");
                    self.state = Preference::Light;
                }
            },
            None => {
                self.target.remove_class(class);
                self.state = Preference::Light;
            }
        }

        log::debug!("theme: initialized to {}", self.state);
        self.state
    }

    /// React to the toggle flipping to `checked`: update the marker, mirror
    /// the toggle, and persist the matching token.
    pub fn handle_change(&mut self, checked: bool) -> Preference {
        let next = Preference::from_checked(checked);
        let class = self.config.dark_class.as_str();

        if next.is_dark() {
            self.target.add_class(class);
        } else {
            self.target.remove_class(class);
        }

        if let Some(toggle) = self.toggle.as_mut() {
            if toggle.is_checked() != checked {
                toggle.set_checked(checked);
            }
        }

        if let Err(err) = self.store.set(&self.config.storage_key, next.token()) {
            log::warn!("theme: failed to persist {next} preference: {err}");
        }

        if next != self.state {
            log::debug!("theme: {} -> {next}", self.state);
        }
        self.state = next;
        next
    }

    fn read_stored(&self) -> Option<String> {
        match self.store.get(&self.config.storage_key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme: failed to read stored preference: {err}");
                None
            }
        }
    }

    // --- Queries ---

    /// Current state as last set by `initialize` or `handle_change`.
    #[must_use]
    pub fn state(&self) -> Preference {
        self.state
    }

    #[must_use]
    pub fn has_toggle(&self) -> bool {
        self.toggle.is_some()
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    #[must_use]
    pub fn toggle(&self) -> Option<&C> {
        self.toggle.as_ref()
    }

    /// Give back the store, e.g. to carry it across a simulated reload.
    pub fn into_store(self) -> S {
        self.store
    }
}
