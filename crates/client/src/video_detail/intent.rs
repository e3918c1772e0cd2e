// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use videotheca_core::VideoId;

use super::{Action, ModelUpdate, State, Task};

#[derive(Debug)]
pub enum Intent {
    FetchVideo(VideoId),
    FetchPictures(VideoId),
    /// Discard the details when leaving the detail view.
    Reset,
}

impl Intent {
    pub fn apply_on(self, state: &mut State) -> ModelUpdate {
        log::trace!("Applying intent {self:?} on {state:?}");
        match self {
            Self::FetchVideo(video_id) => {
                let token = state.video.start_pending_now();
                ModelUpdate::maybe_changed(Action::dispatch_task(Task::FetchVideo {
                    token,
                    video_id,
                }))
            }
            Self::FetchPictures(video_id) => {
                let token = state.pictures.start_pending_now();
                ModelUpdate::maybe_changed(Action::dispatch_task(Task::FetchPictures {
                    token,
                    video_id,
                }))
            }
            Self::Reset => {
                state.reset();
                ModelUpdate::maybe_changed(None)
            }
        }
    }
}
