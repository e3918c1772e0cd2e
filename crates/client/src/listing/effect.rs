// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use videotheca_core::Video;
use videotheca_core_api::PaginatedResult;

use crate::prelude::roundtrip::PendingToken;

use super::{Action, ModelUpdate, State, Task};

#[derive(Debug)]
pub enum Effect {
    /// The canonical query changed and the results must be re-fetched.
    QueryUpdated,
    ResultsFetched {
        token: PendingToken,
        result: anyhow::Result<PaginatedResult<Video>>,
    },
    ErrorOccurred(anyhow::Error),
}

impl Effect {
    pub fn apply_on(self, state: &mut State) -> ModelUpdate {
        log::trace!("Applying effect {self:?} on {state:?}");
        match self {
            Self::QueryUpdated => {
                let token = state.results.start_pending_now();
                let query = state.query.clone();
                ModelUpdate::maybe_changed(Action::dispatch_task(Task::FetchResults {
                    token,
                    query,
                }))
            }
            Self::ResultsFetched { token, result } => match result {
                Ok(results) => {
                    if state
                        .results
                        .finish_pending_with_value_now(token, results)
                        .is_err()
                    {
                        log::debug!("Discarding results of superseded fetch");
                        return ModelUpdate::unchanged(None);
                    }
                    ModelUpdate::maybe_changed(None)
                }
                Err(err) => {
                    if !state.results.finish_pending(token) {
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
