//! # theme-switcher
//!
//! Light/dark theme toggle for server-rendered pages, compiled to
//! WebAssembly. The user's choice is remembered in `localStorage` and
//! reapplied as a marker class on the page body at every load.
//!
//! The controller logic is browser-free and talks to the page only through
//! capability traits, so it is tested with in-memory fakes. The `browser`
//! feature adds the `web-sys` adapters and the WASM exports.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::ThemeController`]: load-time sync and toggle handling |
//! | [`preference`] | Two-state [`preference::Preference`] and its stored tokens |
//! | [`store`] | [`store::PreferenceStore`] capability and in-memory store |
//! | [`target`] | [`target::ThemeTarget`] / [`target::ToggleControl`] capabilities and fakes |
//! | [`config`] | Storage key, toggle id, marker class and host |
//! | [`consts`] | Default literals and stored tokens |
//! | `web` | Browser adapters, event wiring, WASM entry points (feature `browser`) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod preference;
pub mod store;
pub mod target;
#[cfg(feature = "browser")]
pub mod web;

pub use config::{ConfigError, MarkerHost, ThemeConfig};
pub use controller::{ThemeController, ThemeEvent};
pub use preference::Preference;
pub use store::{MemoryStore, PreferenceStore, StoreError};
pub use target::{MemoryTarget, MemoryToggle, ThemeTarget, ToggleControl};
