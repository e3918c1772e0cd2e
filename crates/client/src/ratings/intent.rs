// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use videotheca_core::{STARS_MAX, Stars, VideoId};

use super::{Action, ModelUpdate, State, Task};

#[derive(Debug)]
pub enum Intent {
    Set {
        video_id: VideoId,
        stars: Stars,
        /// Effective rating before the mutation, restored on failure.
        previous: Stars,
    },
    Remove {
        video_id: VideoId,
        previous: Stars,
    },
}

impl Intent {
    pub fn apply_on(self, state: &mut State) -> ModelUpdate {
        log::trace!("Applying intent {self:?} on {state:?}");
        match self {
            Self::Set {
                video_id,
                stars,
                previous,
            } => {
                if !(1..=STARS_MAX).contains(&stars) {
                    log::warn!("Rejecting invalid rating of {stars} star(s)");
                    return ModelUpdate::unchanged(None);
                }
                state.overlay.insert(video_id.clone(), stars);
                ModelUpdate::maybe_changed(Action::dispatch_task(Task::Set {
                    video_id,
                    stars,
                    previous,
                }))
            }
            Self::Remove { video_id, previous } => {
                state.overlay.insert(video_id.clone(), 0);
                ModelUpdate::maybe_changed(Action::dispatch_task(Task::Remove {
                    video_id,
                    previous,
                }))
            }
        }
    }
}
