//! HTTP fetch of the project data document.
//!
//! Browser builds (`csr`) perform the real request via `gloo-net`;
//! non-browser builds return a stub failure so state logic stays testable
//! off-wasm.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode collapses into [`LoadError`]; callers log it and
//! render [`LOAD_FAILURE_MESSAGE`] in the grid instead of surfacing the
//! raw cause to visitors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::projects::Project;

/// Relative location of the project data document. Must be served over
/// HTTP; `file://` loads fail and produce [`LOAD_FAILURE_MESSAGE`].
pub const PROJECTS_URL: &str = "./projects.json";

/// Grid message shown when the project fetch fails, including the
/// local-server hint for people opening the page from disk.
pub const LOAD_FAILURE_MESSAGE: &str = "Unable to load projects.json. If you are opening this file locally, start a local server (for example: \"npx serve\" in this folder) so fetch can read JSON files.";

/// Failure to load the project data document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("projects request failed: {0}")]
    Network(String),
    #[error("failed to load projects: {0}")]
    Status(u16),
    #[error("malformed projects.json: {0}")]
    Parse(String),
}

/// Fetch and parse the full project list from [`PROJECTS_URL`].
///
/// Performs exactly one request per call; the app invokes it once at
/// startup, with no retry and no caching across reloads.
///
/// # Errors
///
/// Returns [`LoadError`] on a network failure, a non-success status, or a
/// malformed document.
pub async fn fetch_projects() -> Result<Vec<Project>, LoadError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(PROJECTS_URL)
            .header("Cache-Control", "no-cache")
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(LoadError::Status(resp.status()));
        }
        resp.json::<Vec<Project>>()
            .await
            .map_err(|e| LoadError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(LoadError::Network(
            "fetch is only available in the browser".to_owned(),
        ))
    }
}
