//! Root application component: state contexts, startup wiring, page chrome.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::case_study_modal::CaseStudyModal;
use crate::components::filter_bar::FilterBar;
use crate::components::nav_bar::NavBar;
use crate::components::project_grid::ProjectGrid;
use crate::state::modal::CaseStudyState;
use crate::state::projects::{ProjectId, ProjectsState};
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::scroll;

#[cfg(feature = "csr")]
use crate::state::modal::REVEAL_DELAY_MS;

/// Base document title; the open case study's title is prepended while the
/// dialog is up.
pub const SITE_TITLE: &str = "Ezra Muir Portfolio";

/// Root component.
///
/// Startup order mirrors the page lifecycle: apply the stored theme, start
/// the one-shot project fetch, then render chrome and sections. All shared
/// state lives in contexts provided here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState {
        dark_mode: dark_mode::read_preference(),
        menu_open: false,
    });
    let projects = RwSignal::new(ProjectsState::default());
    let case_study = RwSignal::new(CaseStudyState::default());

    provide_context(ui);
    provide_context(projects);
    provide_context(case_study);

    // Theme before first paint.
    dark_mode::apply(ui.get_untracked().dark_mode);

    // One fetch per page load; the grid leaves its loading placeholder when
    // this settles, successfully or not.
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_projects().await {
                Ok(list) => projects.update(|p| p.apply_loaded(list)),
                Err(err) => {
                    log::error!("error loading projects: {err}");
                    projects.update(|p| {
                        p.apply_load_failure(crate::net::api::LOAD_FAILURE_MESSAGE);
                    });
                }
            }
        });
    }

    // Card click → dialog open. The paced reveal runs as a detached task
    // holding the token issued at open time; `close` makes it inert.
    let open_case_study = Callback::new(move |id: ProjectId| {
        let Some(project) = projects.with_untracked(|p| p.find(&id).cloned()) else {
            return;
        };
        let mut token = 0;
        case_study.update(|m| token = m.open(project));
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(REVEAL_DELAY_MS))
                    .await;
                case_study.update(|m| {
                    m.reveal(token);
                });
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    });

    // Page scroll follows the dialog phase.
    Effect::new(move || {
        scroll::set_body_scroll_locked(case_study.with(|m| !m.is_closed()));
    });

    // Escape dismisses the dialog while it is up; closing when already
    // closed is a no-op.
    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            case_study.update(CaseStudyState::close);
        }
    });
    on_cleanup(move || escape.remove());

    let page_title = move || {
        case_study.with(|m| {
            m.project()
                .map_or_else(|| SITE_TITLE.to_owned(), |p| format!("{} - {SITE_TITLE}", p.title))
        })
    };

    view! {
        <Title text=page_title/>

        <NavBar/>

        <main>
            <section id="about" class="hero">
                <h1>"Ezra Muir"</h1>
                <p class="hero-tagline">
                    "Full stack developer building pragmatic web systems."
                </p>
            </section>

            <section id="projects" class="projects-section">
                <h2>"Projects"</h2>
                <FilterBar/>
                <ProjectGrid on_select=open_case_study/>
            </section>

            <section id="contact" class="contact-section">
                <h2>"Contact"</h2>
                <p>
                    <a href="mailto:hello@ezramuir.dev">"hello@ezramuir.dev"</a>
                </p>
            </section>
        </main>

        <Show when=move || case_study.with(|m| !m.is_closed())>
            <CaseStudyModal/>
        </Show>
    }
}
