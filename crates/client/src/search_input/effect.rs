// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{Action, Generation, ModelUpdate, State, state::ControlState};

#[derive(Debug)]
pub enum Effect {
    /// The delay of a pending commit has elapsed.
    CommitDue { generation: Generation },
    /// The displayed text has been committed.
    ///
    /// Consumed by the aggregating model that owns the canonical
    /// query, not by this model itself.
    TextCommitted(String),
}

impl Effect {
    pub fn apply_on(self, state: &mut State) -> ModelUpdate {
        log::trace!("Applying effect {self:?} on {state:?}");
        match self {
            Self::CommitDue { generation } => {
                if state.control_state != ControlState::PendingCommit
                    || generation != state.generation
                {
                    log::debug!("Ignoring outdated commit delay");
                    return ModelUpdate::unchanged(None);
                }
                state.control_state = ControlState::Idle;
                ModelUpdate::maybe_changed(Action::apply_effect(Self::TextCommitted(
                    state.text.clone(),
                )))
            }
            Self::TextCommitted(_) => ModelUpdate::unchanged(None),
        }
    }
}
