//! Case-study dialog: overlay, loading indicator, and detail content.

use leptos::prelude::*;

use crate::state::modal::{CaseStudyState, ModalPhase};
use crate::state::projects::{DEFAULT_ROLE, Project, category_label};

/// Dialog overlay for one project's case study.
///
/// The backdrop and the close button dismiss; clicks inside the content
/// area do not. While the state is `Opening` only the loading indicator
/// shows; `Open` swaps it for the populated detail.
#[component]
pub fn CaseStudyModal() -> impl IntoView {
    let case_study = expect_context::<RwSignal<CaseStudyState>>();
    let close = move |_| case_study.update(CaseStudyState::close);

    view! {
        <div class="modal active" on:click=close>
            <div class="modal-container" on:click=move |ev| ev.stop_propagation()>
                <button class="modal-close" on:click=close title="Close case study">
                    "✕"
                </button>

                <Show when=move || case_study.with(|m| m.phase() == ModalPhase::Opening)>
                    <div class="modal-loading">
                        <div class="spinner"></div>
                        <p>"Loading case study..."</p>
                    </div>
                </Show>

                {move || {
                    (case_study.with(|m| m.phase()) == ModalPhase::Open)
                        .then(|| case_study.with(|m| m.project().cloned()))
                        .flatten()
                        .map(|project| view! { <CaseStudyDetail project=project/> })
                }}
            </div>
        </div>
    }
}

/// Populated detail content for one project record.
///
/// Fallbacks per record: no image → inline placeholder graphic, no role →
/// [`DEFAULT_ROLE`], unknown category → raw tag as its own label. The list
/// sections render in document order.
#[component]
fn CaseStudyDetail(project: Project) -> impl IntoView {
    let Project {
        title,
        description,
        category,
        technologies,
        image,
        image_alt,
        role,
        overview,
        challenges,
        solution,
        results,
        ..
    } = project;

    let label = category_label(&category).to_owned();
    let role = role.unwrap_or_else(|| DEFAULT_ROLE.to_owned());
    let alt = image_alt.unwrap_or_else(|| title.clone());
    let badge_class = format!("category-badge category-{category}");

    view! {
        <div class="case-study">
            <header class="case-study-header">
                <span class=badge_class>{label.clone()}</span>
                <h2 class="case-study-title">{title}</h2>
                <p class="case-study-description">{description}</p>
            </header>

            <div class="case-study-image-container">
                {match image {
                    Some(src) => {
                        view! { <img src=src alt=alt class="case-study-image"/> }.into_any()
                    }
                    None => {
                        view! {
                            <div class="case-study-image-placeholder">
                                <svg
                                    xmlns="http://www.w3.org/2000/svg"
                                    viewBox="0 0 200 200"
                                    width="200"
                                    height="200"
                                >
                                    <rect width="200" height="200" fill="#e0e0e0"></rect>
                                    <text
                                        x="100"
                                        y="100"
                                        text-anchor="middle"
                                        dominant-baseline="middle"
                                        font-size="60"
                                        fill="#999"
                                    >
                                        "</>"
                                    </text>
                                </svg>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>

            <div class="case-study-meta">
                <div class="meta-row">
                    <span class="meta-label">"Role"</span>
                    <span class="meta-value">{role}</span>
                </div>
                <div class="meta-row">
                    <span class="meta-label">"Category"</span>
                    <span class="meta-value">{label}</span>
                </div>
            </div>

            <section class="case-study-section">
                <h3>"Overview"</h3>
                <p>{overview}</p>
            </section>

            <DetailList heading="Challenges" items=challenges/>
            <DetailList heading="Solution" items=solution/>
            <DetailList heading="Results" items=results/>

            <section class="case-study-section">
                <h3>"Technologies"</h3>
                <div class="case-study-tech">
                    {technologies
                        .into_iter()
                        .map(|tech| view! { <span class="skill-tag">{tech}</span> })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}

/// Ordered bullet-list section (challenges, solution, results).
#[component]
fn DetailList(heading: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <section class="case-study-section">
            <h3>{heading}</h3>
            <ul class="case-study-list">
                {items
                    .into_iter()
                    .map(|item| view! { <li>{item}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
