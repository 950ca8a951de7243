//! Body scroll locking and smooth in-page anchor scrolling.

/// Lock or restore page scrolling; locked while the case-study dialog is up.
pub fn set_body_scroll_locked(locked: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let style = body.style();
            if locked {
                let _ = style.set_property("overflow", "hidden");
            } else {
                let _ = style.remove_property("overflow");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}

/// Smooth-scroll to the element an in-page `#fragment` href points at.
/// Bare `#` and missing targets are ignored.
pub fn scroll_to_fragment(href: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(id) = href.strip_prefix('#') else {
            return;
        };
        if id.is_empty() {
            return;
        }
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = href;
    }
}
