//! The two-state theme preference and its stored tokens.
//!
//! DESIGN
//! ======
//! Tokens are compared with exact, case-sensitive string equality. Anything
//! that is not a recognized token parses to `None`; callers decide what an
//! unrecognized value means (the controller treats it as "not dark").

use serde::{Deserialize, Serialize};

use crate::consts::{DARK_TOKEN, LIGHT_TOKEN};

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// User choice of visual theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    #[default]
    Light,
    Dark,
}

impl Preference {
    /// Parse a stored token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            DARK_TOKEN => Some(Self::Dark),
            LIGHT_TOKEN => Some(Self::Light),
            _ => None,
        }
    }

    /// Token written to the preference store.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Dark => DARK_TOKEN,
            Self::Light => LIGHT_TOKEN,
        }
    }

    /// State selected by a toggle's checked flag.
    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    /// Checked flag that reflects this state on the toggle.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}
