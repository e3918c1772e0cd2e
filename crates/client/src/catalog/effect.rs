// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use videotheca_core::{Actor, Tag};

use crate::prelude::roundtrip::PendingToken;

use super::{Action, ModelUpdate, State};

#[derive(Debug)]
pub enum Effect {
    TagsFetched {
        token: PendingToken,
        result: anyhow::Result<Vec<Tag>>,
    },
    ActorsFetched {
        token: PendingToken,
        result: anyhow::Result<Vec<Actor>>,
    },
    ErrorOccurred(anyhow::Error),
}

impl Effect {
    pub fn apply_on(self, state: &mut State) -> ModelUpdate {
        log::trace!("Applying effect {self:?} on {state:?}");
        match self {
            Self::TagsFetched { token, result } => match result {
                Ok(tags) => {
                    if state.tags.finish_pending_with_value_now(token, tags).is_err() {
                        log::debug!("Discarding tags of superseded fetch");
                        return ModelUpdate::unchanged(None);
                    }
                    ModelUpdate::maybe_changed(None)
                }
                Err(err) => {
                    if !state.tags.finish_pending(token) {
                        log::debug!("Discarding error of superseded fetch");
                        return ModelUpdate::unchanged(None);
                    }
                    ModelUpdate::maybe_changed(Action::apply_effect(Self::ErrorOccurred(err)))
                }
            },
            Self::ActorsFetched { token, result } => match result {
                Ok(actors) => {
                    if state
                        .actors
                        .finish_pending_with_value_now(token, actors)
                        .is_err()
                    {
                        log::debug!("Discarding actors of superseded fetch");
                        return ModelUpdate::unchanged(None);
                    }
                    ModelUpdate::maybe_changed(None)
                }
                Err(err) => {
                    if !state.actors.finish_pending(token) {
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
