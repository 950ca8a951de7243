//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the projects surface while reading and
//! writing shared state from Leptos context providers.

pub mod case_study_modal;
pub mod filter_bar;
pub mod nav_bar;
pub mod project_card;
pub mod project_grid;
