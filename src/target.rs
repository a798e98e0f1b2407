//! Page-side capabilities the controller drives: the element carrying the
//! dark marker class and the checkbox that flips it.

use std::collections::BTreeSet;

#[cfg(test)]
#[path = "target_test.rs"]
mod target_test;

/// Mutable class set on the marker host (document body or root).
pub trait ThemeTarget {
    /// Add `class`. Adding a present class is a no-op.
    fn add_class(&mut self, class: &str);

    /// Remove `class`. Removing an absent class is a no-op.
    fn remove_class(&mut self, class: &str);

    fn has_class(&self, class: &str) -> bool;
}

/// Checkbox-like control: checked means dark.
pub trait ToggleControl {
    fn is_checked(&self) -> bool;

    fn set_checked(&mut self, checked: bool);
}

/// In-memory class set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTarget {
    classes: BTreeSet<String>,
}

impl MemoryTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Target that already carries `classes`, e.g. server-rendered markup.
    #[must_use]
    pub fn with_classes(classes: &[&str]) -> Self {
        Self { classes: classes.iter().map(|c| (*c).to_owned()).collect() }
    }

    /// Current classes in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl ThemeTarget for MemoryTarget {
    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_owned());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// In-memory checkbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryToggle {
    checked: bool,
}

impl MemoryToggle {
    #[must_use]
    pub fn new(checked: bool) -> Self {
        Self { checked }
    }
}

impl ToggleControl for MemoryToggle {
    fn is_checked(&self) -> bool {
        self.checked
    }

    fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }
}
