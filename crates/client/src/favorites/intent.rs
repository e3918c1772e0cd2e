// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use videotheca_core::VideoId;

use super::{Action, ModelUpdate, State, Task};

#[derive(Debug)]
pub enum Intent {
    FetchAll,
    /// Optimistically add or remove a favorite.
    Toggle(VideoId),
}

impl Intent {
    pub fn apply_on(self, state: &mut State) -> ModelUpdate {
        log::trace!("Applying intent {self:?} on {state:?}");
        match self {
            Self::FetchAll => ModelUpdate::unchanged(Action::dispatch_task(Task::FetchAll)),
            Self::Toggle(video_id) => {
                if state.video_ids.remove(&video_id) {
                    ModelUpdate::maybe_changed(Action::dispatch_task(Task::Remove { video_id }))
                } else {
                    state.video_ids.insert(video_id.clone());
                    ModelUpdate::maybe_changed(Action::dispatch_task(Task::Add { video_id }))
                }
            }
        }
    }
}
