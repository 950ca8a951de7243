//! Top navigation: brand, section links, theme toggle, and mobile menu.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::{dark_mode, scroll};

/// Main nav links; each targets an in-page section anchor.
const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

/// Site navigation bar.
///
/// Anchor clicks smooth-scroll instead of jumping and close the mobile
/// drawer; the theme button flips and persists the dark-mode preference.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_menu = move |_| ui.update(|u| u.menu_open = !u.menu_open);
    let on_toggle_theme = move |_| {
        ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));
    };

    view! {
        <nav class="navbar">
            <a
                class="nav-brand"
                href="#about"
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll::scroll_to_fragment("#about");
                }
            >
                "Ezra Muir"
            </a>

            <button class="mobile-menu-toggle" on:click=on_toggle_menu title="Toggle menu">
                "☰"
            </button>

            <ul class="nav-links" class:active=move || ui.with(|u| u.menu_open)>
                {NAV_LINKS
                    .iter()
                    .map(|&(href, label)| {
                        view! {
                            <li>
                                <a
                                    href=href
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        ui.update(|u| u.menu_open = false);
                                        scroll::scroll_to_fragment(href);
                                    }
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>

            <button class="theme-toggle" on:click=on_toggle_theme title="Toggle dark mode">
                {move || if ui.with(|u| u.dark_mode) { "☀️" } else { "🌙" }}
            </button>
        </nav>
    }
}
