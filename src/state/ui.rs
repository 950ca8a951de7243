//! Page-chrome state: theme flag and the mobile nav drawer.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI chrome state owned by the root component.
///
/// `dark_mode` mirrors the persisted preference; `menu_open` is the mobile
/// nav drawer and is transient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub menu_open: bool,
}
