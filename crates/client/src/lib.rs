// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(unreachable_pub)]
#![warn(unsafe_code)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(clippy::pedantic)]
// Additional restrictions
#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::self_named_module_files)]
// Repetitions of module/type names occur frequently when using many
// modules for keeping the size of the source files handy. Often
// types have the same name as their parent module.
#![allow(clippy::module_name_repetitions)]
// Repeating the type name in `Default::default()` expressions is not needed
// as long as the context is obvious.
#![allow(clippy::default_trait_access)]
// Using wildcard imports consciously is acceptable.
#![allow(clippy::wildcard_imports)]

pub mod catalog;
pub mod favorites;
pub mod listing;
pub mod prelude;
pub mod ratings;
pub mod search_input;
pub mod video_detail;

mod webapi;

use std::sync::Arc;

use async_trait::async_trait;

use videotheca_core_api::video::list::ListQuery;

use crate::prelude::{
    AsyncTask, Environment,
    mutable::{Model, model_updated},
};

/// Aggregated state of all client models.
#[derive(Debug, Default)]
pub struct State {
    last_errors: Vec<anyhow::Error>,
    terminating: bool,
    pub listing: listing::State,
    pub search_input: search_input::State,
    pub catalog: catalog::State,
    pub favorites: favorites::State,
    pub ratings: ratings::State,
    pub video_detail: video_detail::State,
}

impl State {
    #[must_use]
    pub fn last_errors(&self) -> &[anyhow::Error] {
        &self.last_errors
    }

    #[must_use]
    pub const fn is_terminating(&self) -> bool {
        self.terminating
    }
}

pub type Message = crate::prelude::Message<Intent, Effect>;
pub type Action = crate::prelude::Action<Effect, Task>;
pub type ModelUpdated = crate::prelude::mutable::ModelUpdated<Effect, Task>;

impl Model for State {
    type Intent = Intent;
    type Effect = Effect;
    type Task = Task;

    fn update(&mut self, message: Message) -> ModelUpdated {
        log::debug!("Updating state {self:?} with message {message:?}");
        match message {
            Message::Intent(intent) => intent.apply_on(self),
            Message::Effect(effect) => effect.apply_on(self),
        }
    }
}

#[derive(Debug)]
pub enum Intent {
    RenderState,
    InjectEffect(Box<Effect>),
    Terminate,
    ClearFirstErrorsBeforeNextRenderState(usize),
    /// The browsed URL changed, e.g. when following a deep link or
    /// navigating the history.
    ///
    /// Synchronizes the displayed search text and replaces the
    /// canonical query. Never commits pending search text edits and
    /// never resets the page on its own.
    UrlChanged(String),
    ListingIntent(listing::Intent),
    SearchInputIntent(search_input::Intent),
    CatalogIntent(catalog::Intent),
    FavoritesIntent(favorites::Intent),
    RatingsIntent(ratings::Intent),
    VideoDetailIntent(video_detail::Intent),
}

#[derive(Debug)]
pub enum Effect {
    ErrorOccurred(anyhow::Error),
    ClearFirstErrors(usize),
    ListingEffect(listing::Effect),
    SearchInputEffect(search_input::Effect),
    CatalogEffect(catalog::Effect),
    FavoritesEffect(favorites::Effect),
    RatingsEffect(ratings::Effect),
    VideoDetailEffect(video_detail::Effect),
}

#[derive(Debug)]
pub enum Task {
    Listing(listing::Task),
    SearchInput(search_input::Task),
    Catalog(catalog::Task),
    Favorites(favorites::Task),
    Ratings(ratings::Task),
    VideoDetail(video_detail::Task),
}

impl Intent {
    #[allow(clippy::too_many_lines)]
    pub fn apply_on(self, state: &mut State) -> ModelUpdated {
        log::debug!("Applying intent {self:?} on {state:?}");
        match self {
            Self::RenderState => ModelUpdated::maybe_changed(None),
            Self::InjectEffect(effect) => ModelUpdated::unchanged(Action::apply_effect(*effect)),
            Self::Terminate => {
                if state.terminating {
                    return ModelUpdated::unchanged(None);
                }
                state.terminating = true;
                ModelUpdated::maybe_changed(None)
            }
            Self::ClearFirstErrorsBeforeNextRenderState(head_len) => {
                // Errors might have already been cleared in the meantime
                let head_len = head_len.min(state.last_errors.len());
                ModelUpdated::unchanged(Action::apply_effect(Effect::ClearFirstErrors(head_len)))
            }
            Self::UrlChanged(query_string) => {
                let query = ListQuery::decode(&query_string);
                let sync_update = search_input::Intent::SyncText(query.search_text.clone())
                    .apply_on(&mut state.search_input);
                debug_assert!(sync_update.next_action.is_none());
                let mut update: ModelUpdated = model_updated(
                    listing::Intent::NavigateUrl(query).apply_on(&mut state.listing),
                );
                update.state_mutation += sync_update.state_mutation;
                update
            }
            Self::ListingIntent(intent) => model_updated(intent.apply_on(&mut state.listing)),
            Self::SearchInputIntent(intent) => {
                model_updated(intent.apply_on(&mut state.search_input))
            }
            Self::CatalogIntent(intent) => model_updated(intent.apply_on(&mut state.catalog)),
            Self::FavoritesIntent(intent) => model_updated(intent.apply_on(&mut state.favorites)),
            Self::RatingsIntent(intent) => model_updated(intent.apply_on(&mut state.ratings)),
            Self::VideoDetailIntent(intent) => {
                model_updated(intent.apply_on(&mut state.video_detail))
            }
        }
    }
}

impl Effect {
    pub fn apply_on(self, state: &mut State) -> ModelUpdated {
        log::debug!("Applying effect {self:?} on {state:?}");
        match self {
            Self::ErrorOccurred(error)
            | Self::ListingEffect(listing::Effect::ErrorOccurred(error))
            | Self::CatalogEffect(catalog::Effect::ErrorOccurred(error))
            | Self::FavoritesEffect(favorites::Effect::ErrorOccurred(error))
            | Self::RatingsEffect(ratings::Effect::ErrorOccurred(error))
            | Self::VideoDetailEffect(video_detail::Effect::ErrorOccurred(error)) => {
                state.last_errors.push(error);
                ModelUpdated::maybe_changed(None)
            }
            Self::ClearFirstErrors(head_len) => {
                debug_assert!(head_len <= state.last_errors.len());
                state.last_errors = state.last_errors.drain(head_len..).collect();
                ModelUpdated::maybe_changed(None)
            }
            // Committed search text flows into the canonical query
            Self::SearchInputEffect(search_input::Effect::TextCommitted(text)) => model_updated(
                listing::Intent::CommitSearchText(text).apply_on(&mut state.listing),
            ),
            Self::ListingEffect(effect) => model_updated(effect.apply_on(&mut state.listing)),
            Self::SearchInputEffect(effect) => {
                model_updated(effect.apply_on(&mut state.search_input))
            }
            Self::CatalogEffect(effect) => model_updated(effect.apply_on(&mut state.catalog)),
            Self::FavoritesEffect(effect) => model_updated(effect.apply_on(&mut state.favorites)),
            Self::RatingsEffect(effect) => model_updated(effect.apply_on(&mut state.ratings)),
            Self::VideoDetailEffect(effect) => {
                model_updated(effect.apply_on(&mut state.video_detail))
            }
        }
    }
}

#[async_trait]
impl AsyncTask<Effect> for Task {
    async fn execute(self, shared_env: Arc<Environment>) -> Effect {
        let task = self;
        log::debug!("Executing task: {task:?}");
        match task {
            Self::Listing(task) => task.execute_with(&shared_env).await.into(),
            Self::SearchInput(task) => task.execute().await.into(),
            Self::Catalog(task) => task.execute_with(&shared_env).await.into(),
            Self::Favorites(task) => task.execute_with(&shared_env).await.into(),
            Self::Ratings(task) => task.execute_with(&shared_env).await.into(),
            Self::VideoDetail(task) => task.execute_with(&shared_env).await.into(),
        }
    }
}

impl From<Intent> for Message {
    fn from(intent: Intent) -> Self {
        Self::Intent(intent)
    }
}

impl From<Effect> for Message {
    fn from(effect: Effect) -> Self {
        Self::Effect(effect)
    }
}

macro_rules! aggregate_model {
    ($model:ident, $intent_variant:ident, $effect_variant:ident, $task_variant:ident) => {
        impl From<$model::Intent> for Intent {
            fn from(intent: $model::Intent) -> Self {
                Self::$intent_variant(intent)
            }
        }

        impl From<$model::Effect> for Effect {
            fn from(effect: $model::Effect) -> Self {
                Self::$effect_variant(effect)
            }
        }

        impl From<$model::Task> for Task {
            fn from(task: $model::Task) -> Self {
                Self::$task_variant(task)
            }
        }

        impl From<$model::Effect> for Action {
            fn from(effect: $model::Effect) -> Self {
                Self::ApplyEffect(effect.into())
            }
        }

        impl From<$model::Task> for Action {
            fn from(task: $model::Task) -> Self {
                Self::DispatchTask(task.into())
            }
        }

        impl From<$model::Action> for Action {
            fn from(action: $model::Action) -> Self {
                match action {
                    $model::Action::ApplyEffect(effect) => effect.into(),
                    $model::Action::DispatchTask(task) => task.into(),
                }
            }
        }

        impl From<$model::Intent> for Message {
            fn from(intent: $model::Intent) -> Self {
                Self::Intent(intent.into())
            }
        }

        impl From<$model::Effect> for Message {
            fn from(effect: $model::Effect) -> Self {
                Self::Effect(effect.into())
            }
        }
    };
}

aggregate_model!(listing, ListingIntent, ListingEffect, Listing);
aggregate_model!(search_input, SearchInputIntent, SearchInputEffect, SearchInput);
aggregate_model!(catalog, CatalogIntent, CatalogEffect, Catalog);
aggregate_model!(favorites, FavoritesIntent, FavoritesEffect, Favorites);
aggregate_model!(ratings, RatingsIntent, RatingsEffect, Ratings);
aggregate_model!(video_detail, VideoDetailIntent, VideoDetailEffect, VideoDetail);

#[cfg(test)]
mod tests;
