//! Category filter buttons for the projects grid.

use leptos::prelude::*;

use crate::state::projects::{Filter, ProjectsState};

struct FilterButton {
    tag: &'static str,
    label: &'static str,
}

/// Fixed filter set: the `"all"` sentinel plus the known category tags.
const FILTERS: &[FilterButton] = &[
    FilterButton { tag: "all", label: "All Projects" },
    FilterButton { tag: "fullstack", label: "Full Stack" },
    FilterButton { tag: "backend", label: "Backend" },
];

/// Filter button row; the button matching the active filter is marked
/// active.
#[component]
pub fn FilterBar() -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectsState>>();

    view! {
        <div class="project-filters">
            {FILTERS
                .iter()
                .map(|button| {
                    let tag = button.tag;
                    view! {
                        <button
                            class="filter-btn"
                            class:active=move || projects.with(|p| p.filter.tag() == tag)
                            on:click=move |_| {
                                projects.update(|p| p.set_filter(Filter::from_tag(tag)));
                            }
                        >
                            {button.label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
