//! Network-facing modules: the one-shot project data fetch.

pub mod api;
