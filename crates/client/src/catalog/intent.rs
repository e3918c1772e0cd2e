// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{Action, ModelUpdate, State, Task};

#[derive(Debug)]
pub enum Intent {
    FetchTags,
    FetchActors,
}

impl Intent {
    pub fn apply_on(self, state: &mut State) -> ModelUpdate {
        log::trace!("Applying intent {self:?} on {state:?}");
        match self {
            Self::FetchTags => {
                let token = state.tags.start_pending_now();
                ModelUpdate::maybe_changed(Action::dispatch_task(Task::FetchTags { token }))
            }
            Self::FetchActors => {
                let token = state.actors.start_pending_now();
                ModelUpdate::maybe_changed(Action::dispatch_task(Task::FetchActors { token }))
            }
        }
    }
}
