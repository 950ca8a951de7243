//! One project summary card; the whole card opens the case study.

use leptos::prelude::*;

use crate::state::projects::{Project, ProjectId};

/// Clickable summary card for one project.
///
/// Clicking anywhere on the card (including the call-to-action link) opens
/// the case-study dialog instead of navigating; `prevent_default` on the
/// card handler cancels the anchor's default action during bubbling.
#[component]
pub fn ProjectCard(project: Project, on_select: Callback<ProjectId>) -> impl IntoView {
    let Project {
        id,
        title,
        description,
        category,
        technologies,
        ..
    } = project;

    view! {
        <div
            class="project-card"
            data-category=category.clone()
            on:click=move |ev| {
                ev.prevent_default();
                on_select.run(id.clone());
            }
        >
            <div class="project-header">
                <h3 class="project-title">{title}</h3>
                <span class="project-category">{category.clone()}</span>
            </div>
            <div class="project-body">
                <p class="project-description">{description}</p>
                <div class="project-tech">
                    {technologies
                        .into_iter()
                        .map(|tech| view! { <span class="tech-badge">{tech}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <div class="project-footer">
                <a href="#" class="project-btn">"View Case Study →"</a>
            </div>
        </div>
    }
}
