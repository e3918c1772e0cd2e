// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{Action, ModelUpdate, State, Task, state::ControlState};

#[derive(Debug)]
pub enum Intent {
    /// Replace the displayed text after a local edit.
    ///
    /// Arms a delayed commit that supersedes any pending one.
    EditText(String),
    /// Replace the displayed text from an external source.
    ///
    /// Cancels any pending commit without committing.
    SyncText(String),
}

impl Intent {
    pub fn apply_on(self, state: &mut State) -> ModelUpdate {
        log::trace!("Applying intent {self:?} on {state:?}");
        match self {
            Self::EditText(text) => {
                state.text = text;
                state.control_state = ControlState::PendingCommit;
                let generation = state.bump_generation();
                ModelUpdate::maybe_changed(Action::dispatch_task(Task::DelayCommit {
                    generation,
                }))
            }
            Self::SyncText(text) => {
                // Invalidate delay tasks that are still in flight
                state.bump_generation();
                if state.control_state == ControlState::PendingCommit {
                    log::debug!("Cancelling pending commit");
                    state.control_state = ControlState::Idle;
                }
                if state.text == text {
                    return ModelUpdate::unchanged(None);
                }
                state.text = text;
                ModelUpdate::maybe_changed(None)
            }
        }
    }
}
