//! Case-study dialog state machine.
//!
//! DESIGN
//! ======
//! Opening → Open is paced by a fixed delay so the loading indicator stays
//! visible for a beat; the delay is UX pacing, not I/O. The delayed reveal
//! carries a token captured at open time, and `close` (or a re-open) bumps
//! the token, so a stale reveal callback never resurfaces a dismissed
//! dialog or skips a newer one's loading phase.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::state::projects::Project;

/// Pacing delay between the dialog appearing and the detail content showing.
pub const REVEAL_DELAY_MS: u64 = 300;

/// Dialog lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    /// Dialog visible with the loading indicator; detail hidden.
    Opening,
    /// Detail populated and visible.
    Open,
}

/// Case-study dialog state: phase, subject project, and the reveal token.
#[derive(Clone, Debug, Default)]
pub struct CaseStudyState {
    phase: ModalPhase,
    project: Option<Project>,
    token: u64,
}

impl CaseStudyState {
    #[must_use]
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Project currently shown, if any.
    #[must_use]
    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.phase == ModalPhase::Closed
    }

    /// Begin opening for `project`. Returns the token the delayed reveal
    /// step must present; any previously issued token becomes stale.
    pub fn open(&mut self, project: Project) -> u64 {
        self.token = self.token.wrapping_add(1);
        self.phase = ModalPhase::Opening;
        self.project = Some(project);
        self.token
    }

    /// Complete Opening → Open if `token` is still current. Stale tokens
    /// (a close or re-open happened since) leave state untouched.
    pub fn reveal(&mut self, token: u64) -> bool {
        if self.phase == ModalPhase::Opening && token == self.token {
            self.phase = ModalPhase::Open;
            true
        } else {
            false
        }
    }

    /// Dismiss the dialog. Idempotent; invalidates any pending reveal.
    pub fn close(&mut self) {
        self.token = self.token.wrapping_add(1);
        self.phase = ModalPhase::Closed;
        self.project = None;
    }
}
