// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use videotheca_core::VideoId;

use super::{Action, ModelUpdate, State};

#[derive(Debug)]
pub enum Effect {
    AllFetched(anyhow::Result<Vec<VideoId>>),
    AddFinished {
        video_id: VideoId,
        result: anyhow::Result<()>,
    },
    RemoveFinished {
        video_id: VideoId,
        result: anyhow::Result<()>,
    },
    ErrorOccurred(anyhow::Error),
}

impl Effect {
    pub fn apply_on(self, state: &mut State) -> ModelUpdate {
        log::trace!("Applying effect {self:?} on {state:?}");
        match self {
            Self::AllFetched(result) => match result {
                Ok(video_ids) => {
                    state.video_ids = video_ids.into_iter().collect();
                    ModelUpdate::maybe_changed(None)
                }
                Err(err) => {
                    ModelUpdate::unchanged(Action::apply_effect(Self::ErrorOccurred(err)))
                }
            },
            Self::AddFinished { video_id, result } => match result {
                Ok(()) => ModelUpdate::unchanged(None),
                Err(err) => {
                    // Roll back the optimistic insertion
                    state.video_ids.remove(&video_id);
                    ModelUpdate::maybe_changed(Action::apply_effect(Self::ErrorOccurred(err)))
                }
            },
            Self::RemoveFinished { video_id, result } => match result {
                Ok(()) => ModelUpdate::unchanged(None),
                Err(err) => {
                    // Roll back the optimistic removal
                    state.video_ids.insert(video_id);
                    ModelUpdate::maybe_changed(Action::apply_effect(Self::ErrorOccurred(err)))
                }
            },
            Self::ErrorOccurred(err) => {
                ModelUpdate::unchanged(Action::apply_effect(Self::ErrorOccurred(err)))
            }
        }
    }
}
