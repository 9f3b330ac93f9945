//! Simple ⇄ Advanced editor toggle.
//!
//! Switching from raw CRON text back to the simple editor may drop detail
//! the simple form cannot show. The switch only goes through silently when
//! [`is_simple_convertible`] says the expression round-trips; otherwise the
//! host has to ask the user first.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::simple::is_simple_convertible;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    /// Minute, hour and weekday checkboxes.
    #[default]
    Simple,
    /// Free-text CRON.
    Advanced,
}

/// Outcome of a mode switch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeSwitch {
    /// Already in the requested mode.
    Unchanged(EditorMode),
    /// Now in the contained mode.
    Switched(EditorMode),
    /// Still in `from`; the user must confirm losing schedule detail.
    NeedsConfirmation { from: EditorMode, to: EditorMode },
}

impl EditorMode {
    /// Ask to move to `target` while the editor holds `cron`.
    pub fn request_switch(self, target: EditorMode, cron: &str) -> ModeSwitch {
        match (self, target) {
            (from, to) if from == to => ModeSwitch::Unchanged(from),
            (EditorMode::Advanced, EditorMode::Simple) if !is_simple_convertible(cron) => {
                debug!(cron = %cron, "switch to simple mode needs confirmation");
                ModeSwitch::NeedsConfirmation {
                    from: EditorMode::Advanced,
                    to: EditorMode::Simple,
                }
            }
            (_, to) => ModeSwitch::Switched(to),
        }
    }
}

impl ModeSwitch {
    /// The user accepted the prompt.
    pub fn confirm(self) -> ModeSwitch {
        match self {
            ModeSwitch::NeedsConfirmation { to, .. } => ModeSwitch::Switched(to),
            other => other,
        }
    }

    /// Mode the editor is in after this outcome.
    pub fn mode(&self) -> EditorMode {
        match *self {
            ModeSwitch::Unchanged(mode) | ModeSwitch::Switched(mode) => mode,
            ModeSwitch::NeedsConfirmation { from, .. } => from,
        }
    }

    pub fn needs_confirmation(&self) -> bool {
        matches!(self, ModeSwitch::NeedsConfirmation { .. })
    }
}
