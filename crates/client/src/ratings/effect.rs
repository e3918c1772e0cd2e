// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use videotheca_core::{Stars, VideoId};

use super::{Action, ModelUpdate, State};

#[derive(Debug)]
pub enum Effect {
    SetFinished {
        video_id: VideoId,
        previous: Stars,
        result: anyhow::Result<()>,
    },
    RemoveFinished {
        video_id: VideoId,
        previous: Stars,
        result: anyhow::Result<()>,
    },
    ErrorOccurred(anyhow::Error),
}

impl Effect {
    pub fn apply_on(self, state: &mut State) -> ModelUpdate {
        log::trace!("Applying effect {self:?} on {state:?}");
        match self {
            Self::SetFinished {
                video_id,
                previous,
                result,
            }
            | Self::RemoveFinished {
                video_id,
                previous,
                result,
            } => match result {
                Ok(()) => ModelUpdate::unchanged(None),
                Err(err) => {
                    // Roll back to the previously effective rating
                    state.overlay.insert(video_id, previous);
                    ModelUpdate::maybe_changed(Action::apply_effect(Self::ErrorOccurred(err)))
                }
            },
            Self::ErrorOccurred(err) => {
                ModelUpdate::unchanged(Action::apply_effect(Self::ErrorOccurred(err)))
            }
        }
    }
}
