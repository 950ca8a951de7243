//! Projects grid: the filtered card list, the empty state, or the load
//! error.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::state::projects::{ProjectId, ProjectsState};

/// Grid over the filtered project list, in filter order.
///
/// Shows a loading placeholder until the initial fetch settles, the
/// documented error message when it failed, and an empty-state line when no
/// project matches the active filter.
#[component]
pub fn ProjectGrid(on_select: Callback<ProjectId>) -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectsState>>();

    view! {
        <div class="projects-grid">
            {move || {
                let state = projects.get();
                if state.loading {
                    view! { <p class="projects-loading">"Loading projects..."</p> }.into_any()
                } else if let Some(message) = state.load_error {
                    view! { <p class="project-error">{message}</p> }.into_any()
                } else if state.filtered.is_empty() {
                    view! { <p class="projects-empty">"No projects found."</p> }.into_any()
                } else {
                    state
                        .filtered
                        .into_iter()
                        .map(|project| view! { <ProjectCard project=project on_select=on_select/> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
