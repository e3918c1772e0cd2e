// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use videotheca_core::{STARS_MAX, Stars};
use videotheca_core_api::{PageNumber, video::list::ListQuery};

use super::{Action, Effect, ModelUpdate, State};

#[derive(Debug)]
pub enum Intent {
    /// Replace the whole query after the browsed URL changed,
    /// e.g. when following a deep link or navigating the history.
    NavigateUrl(ListQuery),
    CommitSearchText(String),
    ToggleTag(String),
    ToggleActor(String),
    ClearTags,
    ClearActors,
    SetHasVideo(bool),
    ClickMinRating(Stars),
    GoToPage(PageNumber),
    NextPage,
    PreviousPage,
    /// Re-fetch the results of the current query.
    RefreshResults,
}

impl Intent {
    pub fn apply_on(self, state: &mut State) -> ModelUpdate {
        log::trace!("Applying intent {self:?} on {state:?}");
        match self {
            Self::NavigateUrl(query) => {
                if state.query == query {
                    return ModelUpdate::unchanged(None);
                }
                state.query = query;
                query_updated()
            }
            Self::CommitSearchText(text) => {
                if state.query.search_text == text {
                    return ModelUpdate::unchanged(None);
                }
                state.query.commit_search_text(&text);
                query_updated()
            }
            Self::ToggleTag(tag) => {
                state.query.toggle_tag(&tag);
                query_updated()
            }
            Self::ToggleActor(actor) => {
                state.query.toggle_actor(&actor);
                query_updated()
            }
            Self::ClearTags => {
                if state.query.tags.is_empty() {
                    return ModelUpdate::unchanged(None);
                }
                state.query.clear_tags();
                query_updated()
            }
            Self::ClearActors => {
                if state.query.actors.is_empty() {
                    return ModelUpdate::unchanged(None);
                }
                state.query.clear_actors();
                query_updated()
            }
            Self::SetHasVideo(has_video) => {
                if state.query.has_video == has_video {
                    return ModelUpdate::unchanged(None);
                }
                state.query.set_has_video(has_video);
                query_updated()
            }
            Self::ClickMinRating(stars) => {
                if !(1..=STARS_MAX).contains(&stars) {
                    log::warn!("Rejecting invalid rating threshold of {stars} star(s)");
                    return ModelUpdate::unchanged(None);
                }
                state.query.click_min_rating(stars);
                query_updated()
            }
            Self::GoToPage(page) => {
                if page == 0 {
                    log::warn!("Rejecting invalid page number {page}");
                    return ModelUpdate::unchanged(None);
                }
                if state.query.page == page {
                    return ModelUpdate::unchanged(None);
                }
                state.query.set_page(page);
                query_updated()
            }
            Self::NextPage => {
                let Some(next_page) = state
                    .last_results()
                    .filter(|results| results.has_next_page())
                    .map(|results| results.page + 1)
                else {
                    log::debug!("Cannot navigate beyond the last page");
                    return ModelUpdate::unchanged(None);
                };
                state.query.set_page(next_page);
                query_updated()
            }
            Self::PreviousPage => {
                let Some(previous_page) = state
                    .last_results()
                    .filter(|results| results.has_previous_page())
                    .map(|results| results.page - 1)
                else {
                    log::debug!("Cannot navigate before the first page");
                    return ModelUpdate::unchanged(None);
                };
                state.query.set_page(previous_page);
                query_updated()
            }
            Self::RefreshResults => {
                ModelUpdate::unchanged(Action::apply_effect(Effect::QueryUpdated))
            }
        }
    }
}

fn query_updated() -> ModelUpdate {
    ModelUpdate::maybe_changed(Action::apply_effect(Effect::QueryUpdated))
}
