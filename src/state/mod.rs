//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`projects`, `modal`, `ui`) so components can
//! depend on small focused models, and every transition stays unit-testable
//! without a browser.

pub mod modal;
pub mod projects;
pub mod ui;
