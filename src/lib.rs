//! # portfolio
//!
//! Leptos + WASM client for a static personal-portfolio site. Fetches
//! project records from `projects.json`, renders them as filterable cards,
//! and presents per-project case studies in a dialog overlay. The dark-mode
//! preference is persisted in `localStorage`.
//!
//! This crate contains the root component, page components, application
//! state, and the one-shot project fetch. Browser-only glue is gated behind
//! the `csr` feature so state logic stays testable off-wasm.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;
