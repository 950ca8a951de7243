//! Dark mode preference: `localStorage`-backed, applied as a body class.
//!
//! Reads the stored flag and toggles the `dark-mode` class on `<body>`.
//! Requires a browser environment; non-browser builds are inert stubs.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "darkMode";

/// Read the stored preference. Unset or unavailable storage means light
/// mode; there is no system-preference fallback.
#[must_use]
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .is_some_and(|val| val == "true")
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply or remove the `dark-mode` class on `<body>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let class_list = body.class_list();
            if enabled {
                let _ = class_list.add_1("dark-mode");
            } else {
                let _ = class_list.remove_1("dark-mode");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Flip the preference: apply the new mode, persist it, return it.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}
