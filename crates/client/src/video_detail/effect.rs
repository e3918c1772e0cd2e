// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use videotheca_core::Video;

use crate::prelude::roundtrip::PendingToken;

use super::{Action, ModelUpdate, State};

#[derive(Debug)]
pub enum Effect {
    VideoFetched {
        token: PendingToken,
        result: anyhow::Result<Video>,
    },
    PicturesFetched {
        token: PendingToken,
        result: anyhow::Result<Vec<String>>,
    },
    ErrorOccurred(anyhow::Error),
}

impl Effect {
    pub fn apply_on(self, state: &mut State) -> ModelUpdate {
        log::trace!("Applying effect {self:?} on {state:?}");
        match self {
            Self::VideoFetched { token, result } => match result {
                Ok(video) => {
                    if state
                        .video
                        .finish_pending_with_value_now(token, video)
                        .is_err()
                    {
                        log::debug!("Discarding video of superseded fetch");
                        return ModelUpdate::unchanged(None);
                    }
                    ModelUpdate::maybe_changed(None)
                }
                Err(err) => {
                    if !state.video.finish_pending(token) {
                        log::debug!("Discarding error of superseded fetch");
                        return ModelUpdate::unchanged(None);
                    }
                    ModelUpdate::maybe_changed(Action::apply_effect(Self::ErrorOccurred(err)))
                }
            },
            Self::PicturesFetched { token, result } => match result {
                Ok(pictures) => {
                    if state
                        .pictures
                        .finish_pending_with_value_now(token, pictures)
                        .is_err()
                    {
                        log::debug!("Discarding pictures of superseded fetch");
                        return ModelUpdate::unchanged(None);
                    }
                    ModelUpdate::maybe_changed(None)
                }
                Err(err) => {
                    if !state.pictures.finish_pending(token) {
                        log::debug!("Discarding error of superseded fetch");
                        return ModelUpdate::unchanged(None);
                    }
                    ModelUpdate::maybe_changed(Action::apply_effect(Self::ErrorOccurred(err)))
                }
            },
            Self::ErrorOccurred(err) => {
                ModelUpdate::unchanged(Action::apply_effect(Self::ErrorOccurred(err)))
            }
        }
    }
}
