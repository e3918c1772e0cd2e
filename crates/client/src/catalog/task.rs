// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::Deserialize;

use videotheca_core::{Actor, Tag, util::null_to_default};

use crate::{
    prelude::{Environment, roundtrip::PendingToken},
    webapi::receive_response_body,
};

use super::Effect;

#[derive(Debug)]
pub enum Task {
    FetchTags { token: PendingToken },
    FetchActors { token: PendingToken },
}

impl Task {
    pub async fn execute_with(self, env: &Environment) -> Effect {
        log::trace!("Executing task {self:?}");
        match self {
            Self::FetchTags { token } => {
                let result = fetch_tags(env).await;
                Effect::TagsFetched { token, result }
            }
            Self::FetchActors { token } => {
                let result = fetch_actors(env).await;
                Effect::ActorsFetched { token, result }
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct TagsResponseBody {
    #[serde(default, deserialize_with = "null_to_default")]
    tags: Vec<Tag>,
}

#[derive(Debug, Deserialize)]
struct ActorsResponseBody {
    #[serde(default, deserialize_with = "null_to_default")]
    actors: Vec<Actor>,
}

async fn fetch_tags(env: &Environment) -> anyhow::Result<Vec<Tag>> {
    let request_url = env.join_api_url("tags")?;
    let response = env.client().get(request_url).send().await?;
    let response_body = receive_response_body(response).await?;
    let TagsResponseBody { tags } = serde_json::from_slice(&response_body)?;
    log::debug!("Fetched {num_tags} tag(s)", num_tags = tags.len());
    Ok(tags)
}

async fn fetch_actors(env: &Environment) -> anyhow::Result<Vec<Actor>> {
    let request_url = env.join_api_url("actors")?;
    let response = env.client().get(request_url).send().await?;
    let response_body = receive_response_body(response).await?;
    let ActorsResponseBody { actors } = serde_json::from_slice(&response_body)?;
    log::debug!("Fetched {num_actors} actor(s)", num_actors = actors.len());
    Ok(actors)
}
