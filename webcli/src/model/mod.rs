// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Interactive shell model wrapped around the client state.
//!
//! The browsed URL of a web frontend maps to the encoded query
//! string. Every mutation that changes the encoded query pushes the
//! previous one onto a history stack, which the `back` command pops.

use std::sync::Arc;

use async_trait::async_trait;

use videotheca_client as client;
use videotheca_client::prelude::{
    AsyncTask, Environment,
    mutable::{Model as ClientModel, ModelMutation, ModelUpdated, model_updated},
};

pub(crate) mod effect;
mod intent;
mod task;

pub use self::{effect::Effect, intent::Intent, task::Task};

pub type Action = client::prelude::Action<Effect, Task>;
pub type Message = client::prelude::Message<Intent, Effect>;
pub type ModelUpdate = ModelUpdated<Effect, Task>;

#[derive(Debug, Default)]
pub struct CliModel {
    pub client: client::State,
    pub(crate) command_pending: bool,
    pub(crate) history: Vec<String>,
    pub(crate) current_url: String,
}

impl CliModel {
    #[must_use]
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Record the encoded query in the history after it changed.
    fn sync_url_history(&mut self) -> ModelMutation {
        let encoded_query = self.client.listing.encoded_query();
        if encoded_query == self.current_url {
            return ModelMutation::Unchanged;
        }
        let previous_url = std::mem::replace(&mut self.current_url, encoded_query);
        self.history.push(previous_url);
        ModelMutation::MaybeChanged
    }
}

impl ClientModel for CliModel {
    type Intent = Intent;
    type Effect = Effect;
    type Task = Task;

    fn update(&mut self, message: Message) -> ModelUpdate {
        log::debug!("Updating model with message {message:?}");
        let mut update = match message {
            Message::Intent(intent) => intent.apply_on(self),
            Message::Effect(effect) => effect.apply_on(self),
        };
        update.state_mutation += self.sync_url_history();
        update
    }
}

impl From<client::Intent> for Intent {
    fn from(intent: client::Intent) -> Self {
        Self::Client(intent)
    }
}

impl From<client::Effect> for Effect {
    fn from(effect: client::Effect) -> Self {
        Self::Client(effect)
    }
}

impl From<client::Task> for Task {
    fn from(task: client::Task) -> Self {
        Self::Client(task)
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

/// Apply a client intent and lift the resulting update.
fn apply_client_intent(model: &mut CliModel, intent: impl Into<client::Intent>) -> ModelUpdate {
    model_updated(intent.into().apply_on(&mut model.client))
}

#[async_trait]
impl AsyncTask<Effect> for Task {
    async fn execute(self, shared_env: Arc<Environment>) -> Effect {
        match self {
            Self::ReadCommand => Effect::CommandRead(task::read_command_line().await),
            Self::Client(task) => task.execute(shared_env).await.into(),
        }
    }
}
